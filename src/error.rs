//! Error types for phonetree
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::callback::CallbackError;
use crate::tree::NodeId;

/// Result type alias for phonetree operations
pub type PhoneTreeResult<T> = Result<T, PhoneTreeError>;

/// Main error type for phonetree operations
#[derive(Error, Debug)]
pub enum PhoneTreeError {
    /// A handle does not name a node of the expected kind in this tree
    #[error("unknown {expected} {node}")]
    UnknownNode { node: NodeId, expected: &'static str },

    /// A callback could not be normalized when it was attached
    #[error(transparent)]
    Callback(#[from] CallbackError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration value out of range
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
