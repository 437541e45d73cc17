use crate::core::forcefield::params::{SimulationParams, SolventMode, StructureBias};
use crate::core::models::sequence::MIN_RESIDUES;
use crate::engine::integrator::HARD_INSET;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid canvas dimensions {width}x{height}; each must exceed {min}", min = 2.0 * HARD_INSET)]
    InvalidDimensions { width: f64, height: f64 },

    #[error("initial sequence length {requested} is below the minimum of {MIN_RESIDUES}")]
    SequenceTooShort { requested: usize },

    #[error("chart width must be nonzero")]
    EmptyChart,
}

/// Whether the frame loop advances physics or only refreshes the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// Labeled band of the [0, 1] temperature slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Low,
    Medium,
    High,
}

impl TemperatureBand {
    pub fn of(value: f64) -> Self {
        if value < 0.34 {
            TemperatureBand::Low
        } else if value > 0.67 {
            TemperatureBand::High
        } else {
            TemperatureBand::Medium
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TemperatureBand::Low => "Low",
                TemperatureBand::Medium => "Medium",
                TemperatureBand::High => "High",
            }
        )
    }
}

/// Named sequence presets of the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// A hydrophobic cluster flanked by charged residues.
    Core,
    /// An amphipathic-like alternation that also forces the helix bias.
    Helix,
}

impl Preset {
    pub fn sequence(self) -> &'static str {
        match self {
            Preset::Core => "KKSSRRVILFWYAVILMFDDDEEE",
            Preset::Helix => "AKLAKLAKLAKLAKLAKLA",
        }
    }

    /// The bias the preset forces, if any.
    pub fn forced_bias(self) -> Option<StructureBias> {
        match self {
            Preset::Core => None,
            Preset::Helix => Some(StructureBias::Helix),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown preset '{0}', expected core or helix")]
pub struct ParsePresetError(pub String);

impl std::str::FromStr for Preset {
    type Err = ParsePresetError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(Preset::Core),
            "helix" => Ok(Preset::Helix),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

/// Boolean display options of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayToggles {
    /// Draw hydrogen-bond-style register edges.
    pub hydrogen_bonds: bool,
    /// Record and draw per-residue motion trails.
    pub trails: bool,
    /// Draw the hydrophobic-core reference ring.
    pub core_ring: bool,
    /// Allow residues to be picked up and dragged.
    pub drag: bool,
}

/// Validated construction-time configuration of a [`crate::engine::state::Simulation`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub params: SimulationParams,
    pub solvent: SolventMode,
    pub bias: StructureBias,
    pub display: DisplayToggles,
    /// RNG seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Length of the initial random sequence.
    pub sequence_length: usize,
    /// Capacity of the energy trace, one sample per chart pixel column.
    pub chart_width: usize,
}

#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder {
    width: f64,
    height: f64,
    params: SimulationParams,
    solvent: SolventMode,
    bias: StructureBias,
    display: DisplayToggles,
    seed: Option<u64>,
    sequence_length: usize,
    chart_width: usize,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            params: SimulationParams::default(),
            solvent: SolventMode::Water,
            bias: StructureBias::None,
            display: DisplayToggles::default(),
            seed: None,
            sequence_length: 30,
            chart_width: 640,
        }
    }
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    pub fn solvent(mut self, solvent: SolventMode) -> Self {
        self.solvent = solvent;
        self
    }

    pub fn bias(mut self, bias: StructureBias) -> Self {
        self.bias = bias;
        self
    }

    pub fn display(mut self, display: DisplayToggles) -> Self {
        self.display = display;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sequence_length(mut self, n: usize) -> Self {
        self.sequence_length = n;
        self
    }

    pub fn chart_width(mut self, columns: usize) -> Self {
        self.chart_width = columns;
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 2.0 * HARD_INSET
            || self.height <= 2.0 * HARD_INSET
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.sequence_length < MIN_RESIDUES {
            return Err(ConfigError::SequenceTooShort {
                requested: self.sequence_length,
            });
        }
        if self.chart_width == 0 {
            return Err(ConfigError::EmptyChart);
        }
        Ok(SimulationConfig {
            width: self.width,
            height: self.height,
            params: self.params,
            solvent: self.solvent,
            bias: self.bias,
            display: self.display,
            seed: self.seed,
            sequence_length: self.sequence_length,
            chart_width: self.chart_width,
        })
    }
}
