use super::config::{
    DisplayToggles, Preset, RunState, SimulationConfig, TemperatureBand,
};
use super::energy::EnergyTracker;
use super::forces::{self, ForceBuffer, ForceInputs};
use super::integrator;
use super::trace::EnergyTrace;
use crate::core::forcefield::energy;
use crate::core::forcefield::params::{SimulationParams, SolventMode, StructureBias};
use crate::core::models::chain::Chain;
use crate::core::models::sequence::Sequence;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Cooling decay applied once per displayed frame, and its floor.
const COOLING_DECAY: f64 = 0.9995;
const COOLING_FLOOR: f64 = 0.3;
/// Pointer picking thresholds in canvas units.
pub const HOVER_RADIUS: f64 = 14.0;
pub const DRAG_RADIUS: f64 = 12.0;

/// The simulator instance: one chain, its parameters and control settings,
/// and the per-frame bookkeeping (cooling, energy extrema, trace).
///
/// All state is owned here and mutated only from the frame callback or from
/// control-change calls on the same thread; the instance runs until dropped.
pub struct Simulation {
    width: f64,
    height: f64,
    params: SimulationParams,
    solvent: SolventMode,
    bias: StructureBias,
    display: DisplayToggles,
    run_state: RunState,
    sequence: Sequence,
    chain: Chain,
    cooling: f64,
    rng: StdRng,
    forces: ForceBuffer,
    energy: EnergyTracker,
    trace: EnergyTrace,
    hover: Option<usize>,
    drag: Option<usize>,
    frame: u64,
}

impl Simulation {
    /// Builds a fresh simulator from a validated configuration. Cooling and
    /// the energy extrema start from scratch here and nowhere else.
    pub fn new(config: SimulationConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sequence = Sequence::random(config.sequence_length, &mut rng);
        let chain = Chain::from_sequence(&sequence, config.width, config.height, &mut rng);
        debug!(
            residues = chain.len(),
            solvent = %config.solvent,
            "simulation constructed"
        );
        Self {
            width: config.width,
            height: config.height,
            params: config.params,
            solvent: config.solvent,
            bias: config.bias,
            display: config.display,
            run_state: RunState::Running,
            sequence,
            chain,
            cooling: 1.0,
            rng,
            forces: ForceBuffer::default(),
            energy: EnergyTracker::new(),
            trace: EnergyTrace::new(config.chart_width),
            hover: None,
            drag: None,
            frame: 0,
        }
    }

    /// One animation-frame callback: advances physics unless paused, then
    /// decays the cooling factor and appends the energy sample to the trace.
    pub fn frame(&mut self, dt_ms: f64) {
        if self.run_state == RunState::Running {
            self.step(dt_ms);
        }
        self.cooling = (self.cooling * COOLING_DECAY).max(COOLING_FLOOR);
        self.trace.push(self.energy.current());
        self.frame += 1;
    }

    /// One physics step: force accumulation, integration, energy estimate.
    pub fn step(&mut self, dt_ms: f64) {
        let inputs = ForceInputs {
            chain: &self.chain,
            params: &self.params,
            solvent: self.solvent,
            bias: self.bias,
            cooling: self.cooling,
            width: self.width,
            height: self.height,
        };
        forces::accumulate(&inputs, &mut self.rng, &mut self.forces);
        integrator::integrate(
            &mut self.chain,
            &self.forces,
            dt_ms,
            self.params.speed,
            self.width,
            self.height,
            self.display.trails,
        );
        let estimate = energy::total(
            &self.chain,
            &self.params,
            self.solvent,
            self.width,
            self.height,
        );
        self.energy.record(estimate);
    }

    // --- Sequence controls -------------------------------------------------

    /// Applies a free-text sequence. Inputs yielding fewer than three valid
    /// residues are ignored and the previous chain kept; returns whether the
    /// chain was replaced.
    pub fn apply_sequence(&mut self, raw: &str) -> bool {
        match Sequence::parse(raw) {
            Ok(sequence) => {
                self.sequence = sequence;
                self.rebuild_chain();
                true
            }
            Err(e) => {
                debug!(error = %e, "ignoring degenerate sequence input");
                false
            }
        }
    }

    /// Applies a named preset; the helix preset also forces the helix bias.
    pub fn apply_preset(&mut self, preset: Preset) {
        let applied = self.apply_sequence(preset.sequence());
        debug_assert!(applied, "preset strings always parse");
        if let Some(bias) = preset.forced_bias() {
            self.bias = bias;
        }
    }

    /// Draws a fresh random sequence of the current length and relays it out.
    pub fn randomize(&mut self) {
        self.sequence = Sequence::random(self.sequence.len(), &mut self.rng);
        self.rebuild_chain();
    }

    /// Relays the current sequence out along the initial line. Does not
    /// touch cooling or the energy extrema.
    pub fn reset(&mut self) {
        self.rebuild_chain();
    }

    fn rebuild_chain(&mut self) {
        self.chain = Chain::from_sequence(&self.sequence, self.width, self.height, &mut self.rng);
        self.hover = None;
        self.drag = None;
    }

    // --- Control surface ---------------------------------------------------

    pub fn set_solvent(&mut self, solvent: SolventMode) {
        self.solvent = solvent;
    }

    pub fn set_bias(&mut self, bias: StructureBias) {
        self.bias = bias;
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.params.temperature = value.clamp(0.0, 1.0);
    }

    pub fn set_speed(&mut self, value: f64) {
        self.params.speed = value.max(0.0);
    }

    pub fn set_display(&mut self, display: DisplayToggles) {
        self.display = display;
    }

    pub fn toggle_pause(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        self.run_state
    }

    // --- Pointer interaction -----------------------------------------------

    /// Updates the hover pick and, while dragging, pins the dragged residue
    /// at the pointer with zeroed velocity.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.hover = self.nearest_residue(x, y, HOVER_RADIUS);
        if let Some(index) = self.drag {
            if self.display.drag {
                let residue = &mut self.chain.residues_mut()[index];
                residue.position.x = x;
                residue.position.y = y;
                residue.velocity.x = 0.0;
                residue.velocity.y = 0.0;
            }
        }
    }

    /// Starts a drag on the first residue within range, if dragging is on.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !self.display.drag {
            return;
        }
        self.drag = self
            .chain
            .residues()
            .iter()
            .position(|r| (r.position - nalgebra::Point2::new(x, y)).norm() < DRAG_RADIUS);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    fn nearest_residue(&self, x: f64, y: f64, threshold: f64) -> Option<usize> {
        let target = nalgebra::Point2::new(x, y);
        let mut best: Option<usize> = None;
        let mut best_dist = threshold;
        for (i, residue) in self.chain.residues().iter().enumerate() {
            let dist = (residue.position - target).norm();
            if dist < best_dist {
                best_dist = dist;
                best = Some(i);
            }
        }
        best
    }

    // --- Accessors ---------------------------------------------------------

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn solvent(&self) -> SolventMode {
        self.solvent
    }

    pub fn bias(&self) -> StructureBias {
        self.bias
    }

    pub fn display(&self) -> DisplayToggles {
        self.display
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn cooling(&self) -> f64 {
        self.cooling
    }

    pub fn energy(&self) -> &EnergyTracker {
        &self.energy
    }

    pub fn trace(&self) -> &EnergyTrace {
        &self.trace
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover
    }

    pub fn dragged(&self) -> Option<usize> {
        self.drag
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn temperature_band(&self) -> TemperatureBand {
        TemperatureBand::of(self.params.temperature)
    }

    /// The hydrogen-bond-like register pairs of the active bias; empty when
    /// the bias is none.
    pub fn register_pairs(&self) -> Vec<(usize, usize)> {
        match self.bias.register_offset() {
            Some(offset) => self.chain.offset_pairs(offset).collect(),
            None => Vec::new(),
        }
    }
}
