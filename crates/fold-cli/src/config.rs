use crate::error::Result;
use hydrofold::core::forcefield::params::SimulationParams;
use hydrofold::engine::error::EngineError;
use std::path::Path;
use tracing::{info, warn};

/// Resolves the effective simulation parameters: the TOML file when given,
/// built-in defaults otherwise, with CLI overrides applied on top.
pub fn resolve_params(
    path: Option<&Path>,
    temperature: Option<f64>,
    speed: Option<f64>,
) -> Result<SimulationParams> {
    let mut params = match path {
        Some(p) => {
            info!(path = %p.display(), "loading simulation parameters");
            SimulationParams::load(p).map_err(EngineError::from)?
        }
        None => SimulationParams::default(),
    };

    if let Some(t) = temperature {
        let clamped = t.clamp(0.0, 1.0);
        if clamped != t {
            warn!(requested = t, "temperature clamped into [0, 1]");
        }
        params.temperature = clamped;
    }
    if let Some(s) = speed {
        let clamped = s.max(0.0);
        if clamped != s {
            warn!(requested = s, "negative speed clamped to 0");
        }
        params.speed = clamped;
    }

    Ok(params)
}
