use std::io;
use std::path::PathBuf;

/// Error type for list conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
