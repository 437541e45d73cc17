use crate::core::forcefield::params::{SimulationParams, SolventMode, StructureBias};
use crate::core::forcefield::potentials;
use crate::core::models::chain::Chain;
use crate::core::models::residue::Polarity;
use crate::core::utils::geometry::{self, MIN_DISTANCE, MIN_PAIR_DISTANCE};
use nalgebra::{Point2, Vector2};
use rand::Rng;

/// Amplifier on heterotypic (mixed-polarity) pair interactions.
const MIXED_PAIR_SCALE: f64 = 1.3;
/// Amplifier on the solvent-favored homotypic attraction (HH in water,
/// PP in membrane).
const FAVORED_PAIR_SCALE: f64 = 1.6;
/// Soft wall margin and stiffness.
const WALL_MARGIN: f64 = 22.0;
const WALL_K: f64 = 0.6;
/// Scale of the thermal jitter force.
const JITTER_SCALE: f64 = 0.8;
/// Ring-field stiffness before cooling/temperature scaling.
const RING_K: f64 = 0.06;
/// Preferred radii as fractions of the smaller canvas dimension.
const CORE_RADIUS_FRACTION: f64 = 0.22;
const SHELL_RADIUS_FRACTION: f64 = 0.40;
const INTERMEDIATE_CORE_FRACTION: f64 = 0.28;
const INTERMEDIATE_SHELL_FRACTION: f64 = 0.36;
/// Weak both-ways radial bias of the intermediate regime.
const INTERMEDIATE_RADIAL_DIR: f64 = 0.6;

/// How strongly the structure-seeking fields act as the run cools.
#[inline]
pub fn strengthen_factor(cooling: f64) -> f64 {
    1.0 + (1.0 - cooling) * 1.2
}

/// Per-residue force accumulator, indexed by chain position. Cleared and
/// refilled every step; force contributions are additive, so stage order
/// never changes the sum.
#[derive(Debug, Clone, Default)]
pub struct ForceBuffer {
    forces: Vec<Vector2<f64>>,
}

impl ForceBuffer {
    pub fn new(n: usize) -> Self {
        Self {
            forces: vec![Vector2::zeros(); n],
        }
    }

    /// Zeroes every slot, resizing to match the chain.
    pub fn reset(&mut self, n: usize) {
        self.forces.clear();
        self.forces.resize(n, Vector2::zeros());
    }

    #[inline]
    pub fn add(&mut self, index: usize, force: Vector2<f64>) {
        self.forces[index] += force;
    }

    pub fn get(&self, index: usize) -> Vector2<f64> {
        self.forces[index]
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.forces
    }
}

/// Read-only view of the simulation state the force pass needs.
pub struct ForceInputs<'a> {
    pub chain: &'a Chain,
    pub params: &'a SimulationParams,
    pub solvent: SolventMode,
    pub bias: StructureBias,
    pub cooling: f64,
    pub width: f64,
    pub height: f64,
}

impl ForceInputs<'_> {
    fn center(&self) -> Point2<f64> {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Fills the buffer with the net force on every residue: bond springs,
/// angular stiffness, register springs, non-bonded pairs, the radial and
/// ring solvent fields, wall containment, and thermal jitter.
pub fn accumulate(inputs: &ForceInputs, rng: &mut impl Rng, forces: &mut ForceBuffer) {
    forces.reset(inputs.chain.len());
    bond_springs(inputs, forces);
    angular_stiffness(inputs, forces);
    register_springs(inputs, forces);
    nonbonded_pairs(inputs, forces);
    solvent_radial_field(inputs, forces);
    target_ring_field(inputs, forces);
    wall_forces(inputs, forces);
    thermal_jitter(inputs, rng, forces);
}

fn bond_springs(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let residues = inputs.chain.residues();
    for (i, j) in inputs.chain.bonds() {
        let (unit, dist) = geometry::unit_toward(
            &residues[i].position,
            &residues[j].position,
            MIN_DISTANCE,
        );
        let f = potentials::spring(dist, inputs.params.rest_length, inputs.params.bond_k);
        forces.add(i, unit * f);
        forces.add(j, unit * -f);
    }
}

fn angular_stiffness(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let residues = inputs.chain.residues();
    let target = inputs.bias.angle_target();
    for i in 1..residues.len().saturating_sub(1) {
        let prev = &residues[i - 1].position;
        let mid = &residues[i].position;
        let next = &residues[i + 1].position;
        let deviation = geometry::interior_angle(prev, mid, next) - target;
        let f = -inputs.params.angle_k * deviation;
        forces.add(i, geometry::bond_bisector(prev, mid, next) * f);
    }
}

fn register_springs(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let (offset, target, k) = match inputs.bias {
        StructureBias::None => return,
        StructureBias::Helix => (3, inputs.params.hb_dist, inputs.params.hb_k),
        StructureBias::Sheet => (2, inputs.params.hb_dist + 8.0, inputs.params.hb_k * 0.8),
    };
    let residues = inputs.chain.residues();
    for (i, j) in inputs.chain.offset_pairs(offset) {
        let (unit, dist) = geometry::unit_toward(
            &residues[i].position,
            &residues[j].position,
            MIN_DISTANCE,
        );
        let f = potentials::spring(dist, target, k);
        forces.add(i, unit * f);
        forces.add(j, unit * -f);
    }
}

fn nonbonded_pairs(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let residues = inputs.chain.residues();
    let n = residues.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (unit, dist) = geometry::unit_toward(
                &residues[i].position,
                &residues[j].position,
                MIN_PAIR_DISTANCE,
            );
            let repulse = potentials::soft_core_repulsion(dist, inputs.params.repulsion);
            forces.add(i, unit * -repulse);
            forces.add(j, unit * repulse);

            if dist < potentials::PAIR_RANGE {
                let a = residues[i].polarity();
                let b = residues[j].polarity();
                let eps = inputs.params.pair_eps.strength(inputs.solvent, a, b);
                let mut fa = potentials::pair_interaction(dist, eps, inputs.params.temperature);
                if a != b {
                    fa *= MIXED_PAIR_SCALE;
                }
                let favored = matches!(
                    (inputs.solvent, a, b),
                    (SolventMode::Water, Polarity::Hydrophobic, Polarity::Hydrophobic)
                        | (SolventMode::Membrane, Polarity::Polar, Polarity::Polar)
                );
                if favored {
                    fa *= FAVORED_PAIR_SCALE;
                }
                forces.add(i, unit * fa);
                forces.add(j, unit * -fa);
            }
        }
    }
}

fn solvent_radial_field(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let center = inputs.center();
    let strengthen = strengthen_factor(inputs.cooling);
    let solvent_scale = match inputs.solvent {
        SolventMode::Water => 1.0,
        SolventMode::Intermediate => 0.7,
        SolventMode::Membrane => 0.5,
    };
    let temp_scale = 1.0 - 0.5 * inputs.params.temperature;
    for (i, residue) in inputs.chain.residues().iter().enumerate() {
        let (toward_center, dist) = geometry::unit_toward(&residue.position, &center, MIN_DISTANCE);
        let dir = match (inputs.solvent, residue.polarity()) {
            (SolventMode::Water, Polarity::Hydrophobic) => 1.0,
            (SolventMode::Water, Polarity::Polar) => -1.0,
            (SolventMode::Membrane, Polarity::Hydrophobic) => -1.0,
            (SolventMode::Membrane, Polarity::Polar) => 1.0,
            (SolventMode::Intermediate, Polarity::Hydrophobic) => INTERMEDIATE_RADIAL_DIR,
            (SolventMode::Intermediate, Polarity::Polar) => -INTERMEDIATE_RADIAL_DIR,
        };
        let mag = inputs.params.radial_k * solvent_scale * strengthen * temp_scale * dir * dist;
        forces.add(i, toward_center * mag);
    }
}

fn target_ring_field(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    let center = inputs.center();
    let min_dim = inputs.width.min(inputs.height);
    let core = CORE_RADIUS_FRACTION * min_dim;
    let shell = SHELL_RADIUS_FRACTION * min_dim;
    let k_ring =
        RING_K * strengthen_factor(inputs.cooling) * (1.0 - 0.4 * inputs.params.temperature);
    for (i, residue) in inputs.chain.residues().iter().enumerate() {
        let (outward, radius) = geometry::unit_toward(&center, &residue.position, MIN_DISTANCE);
        let target = match (inputs.solvent, residue.polarity()) {
            (SolventMode::Water, Polarity::Hydrophobic) => core,
            (SolventMode::Water, Polarity::Polar) => shell,
            (SolventMode::Membrane, Polarity::Hydrophobic) => shell,
            (SolventMode::Membrane, Polarity::Polar) => core,
            (SolventMode::Intermediate, Polarity::Hydrophobic) => {
                INTERMEDIATE_CORE_FRACTION * min_dim
            }
            (SolventMode::Intermediate, Polarity::Polar) => INTERMEDIATE_SHELL_FRACTION * min_dim,
        };
        let f = potentials::ring_restore(radius, target, k_ring);
        forces.add(i, outward * f);
    }
}

fn wall_forces(inputs: &ForceInputs, forces: &mut ForceBuffer) {
    for (i, residue) in inputs.chain.residues().iter().enumerate() {
        let fx = potentials::wall_containment(residue.position.x, inputs.width, WALL_MARGIN, WALL_K);
        let fy =
            potentials::wall_containment(residue.position.y, inputs.height, WALL_MARGIN, WALL_K);
        forces.add(i, Vector2::new(fx, fy));
    }
}

fn thermal_jitter(inputs: &ForceInputs, rng: &mut impl Rng, forces: &mut ForceBuffer) {
    let jitter = inputs.params.temperature * inputs.cooling * JITTER_SCALE;
    for i in 0..inputs.chain.len() {
        let fx = (rng.r#gen::<f64>() - 0.5) * jitter;
        let fy = (rng.r#gen::<f64>() - 0.5) * jitter;
        forces.add(i, Vector2::new(fx, fy));
    }
}
