use crate::core::models::residue::{PairClass, Polarity};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Solvent regime selecting the active pair-coefficient row and the radial
/// field polarity mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolventMode {
    Water,
    Membrane,
    Intermediate,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown solvent mode '{0}', expected water, membrane, or intermediate")]
pub struct ParseSolventError(pub String);

impl FromStr for SolventMode {
    type Err = ParseSolventError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "water" => Ok(SolventMode::Water),
            "membrane" => Ok(SolventMode::Membrane),
            "intermediate" => Ok(SolventMode::Intermediate),
            other => Err(ParseSolventError(other.to_string())),
        }
    }
}

impl fmt::Display for SolventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SolventMode::Water => "water",
                SolventMode::Membrane => "membrane",
                SolventMode::Intermediate => "intermediate",
            }
        )
    }
}

/// Secondary-structure bias selecting the angular target and the long-range
/// register-spring pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureBias {
    None,
    Helix,
    Sheet,
}

impl StructureBias {
    /// Target interior bond angle in radians.
    pub fn angle_target(self) -> f64 {
        use std::f64::consts::PI;
        match self {
            StructureBias::None => PI * 0.75,
            StructureBias::Helix => PI * 0.70,
            StructureBias::Sheet => PI * 0.98,
        }
    }

    /// Index offset of the hydrogen-bond-like register springs, if any
    /// (i, i+3 for helix; i, i+2 for sheet).
    pub fn register_offset(self) -> Option<usize> {
        match self {
            StructureBias::None => None,
            StructureBias::Helix => Some(3),
            StructureBias::Sheet => Some(2),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown structure bias '{0}', expected none, helix, or sheet")]
pub struct ParseBiasError(pub String);

impl FromStr for StructureBias {
    type Err = ParseBiasError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(StructureBias::None),
            "helix" => Ok(StructureBias::Helix),
            "sheet" => Ok(StructureBias::Sheet),
            other => Err(ParseBiasError(other.to_string())),
        }
    }
}

impl fmt::Display for StructureBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StructureBias::None => "none",
                StructureBias::Helix => "helix",
                StructureBias::Sheet => "sheet",
            }
        )
    }
}

/// Pairwise interaction coefficients for one solvent regime. Positive values
/// attract, negative repel; `hp` covers both HP and PH orderings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PairEps {
    pub hh: f64,
    pub pp: f64,
    pub hp: f64,
}

impl PairEps {
    pub fn for_class(&self, class: PairClass) -> f64 {
        match class {
            PairClass::HydrophobicPair => self.hh,
            PairClass::PolarPair => self.pp,
            PairClass::Mixed => self.hp,
        }
    }
}

/// The solvent-indexed pair-coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PairEpsTable {
    pub water: PairEps,
    pub membrane: PairEps,
    pub intermediate: PairEps,
}

impl PairEpsTable {
    pub fn for_solvent(&self, solvent: SolventMode) -> &PairEps {
        match solvent {
            SolventMode::Water => &self.water,
            SolventMode::Membrane => &self.membrane,
            SolventMode::Intermediate => &self.intermediate,
        }
    }

    /// Interaction coefficient for a residue pair under the given solvent.
    /// Symmetric in its polarity arguments.
    pub fn strength(&self, solvent: SolventMode, a: Polarity, b: Polarity) -> f64 {
        self.for_solvent(solvent).for_class(PairClass::of(a, b))
    }
}

/// The fixed simulation parameter record. Mutated only through explicit
/// external controls; otherwise constant for the process lifetime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Hookean bond stiffness.
    pub bond_k: f64,
    /// Bond rest length in canvas units.
    pub rest_length: f64,
    /// Angular stiffness at interior residues.
    pub angle_k: f64,
    /// Non-bonded soft-core repulsion coefficient.
    pub repulsion: f64,
    /// Solvent-indexed polarity-pair coefficients.
    pub pair_eps: PairEpsTable,
    /// Thermal noise scale in [0, 1].
    pub temperature: f64,
    /// Time-scale multiplier applied to every step.
    pub speed: f64,
    /// Radial solvent-field strength.
    pub radial_k: f64,
    /// Hydrogen-bond-like register spring stiffness.
    pub hb_k: f64,
    /// Hydrogen-bond-like register spring target distance.
    pub hb_dist: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            bond_k: 0.75,
            rest_length: 16.0,
            angle_k: 0.12,
            repulsion: 900.0,
            pair_eps: PairEpsTable {
                water: PairEps { hh: 2.2, pp: 0.3, hp: -1.2 },
                membrane: PairEps { hh: 0.8, pp: 1.8, hp: -0.6 },
                intermediate: PairEps { hh: 1.4, pp: 1.0, hp: -0.9 },
            },
            temperature: 0.55,
            speed: 1.0,
            radial_k: 0.12,
            hb_k: 0.22,
            hb_dist: 34.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl SimulationParams {
    /// Loads parameters from a TOML file. Missing fields fall back to the
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
