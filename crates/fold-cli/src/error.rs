use hydrofold::engine::error::EngineError;
use hydrofold::engine::trace::TraceExportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    FoldCore(#[from] EngineError),

    #[error("Failed to export energy trace: {0}")]
    TraceExport(#[from] TraceExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
