//! Error types for debug info queries

use thiserror::Error;

/// Result type for debug info queries
pub type DebugInfoResult<T> = Result<T, DebugInfoError>;

/// Errors that can occur while resolving a tensor's on-device shape
#[derive(Error, Debug)]
pub enum DebugInfoError {
    #[error("Tensor not ready: {0}")]
    NotReady(String),

    #[error("Shape lookup failed: {0}")]
    Lookup(String),

    #[error("Device shape computation failed: {0}")]
    DeviceShape(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DebugInfoError {
    /// True for permanent shape-structure errors (bad tuples, bad layouts).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DebugInfoError::InvalidArgument(_))
    }
}
