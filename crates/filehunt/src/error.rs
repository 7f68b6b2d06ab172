use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("root is not an existing directory: {0}")]
    InvalidRoot(PathBuf),

    #[error("destination not writable: {path}: {reason}")]
    DestinationUnwritable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
