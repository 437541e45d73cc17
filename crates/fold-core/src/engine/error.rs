use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid simulation configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load simulation parameters: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },
}
