//! Error types for chunk sizing and its supporting helpers.

use std::fmt;

/// Main error type for the chunkwise crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkwiseError {
    /// Caller violated an operation's input contract.
    InvalidArgument {
        context: String,
        reason: String,
    },
    /// Configuration file could not be read.
    ConfigIo {
        context: String,
        reason: String,
    },
    /// Configuration file could not be parsed.
    ConfigParse {
        context: String,
        reason: String,
    },
    /// Process or host information could not be obtained.
    Unavailable {
        context: String,
    },
}

impl fmt::Display for ChunkwiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkwiseError::InvalidArgument { context, reason } => {
                write!(f, "Invalid argument in {context}: {reason}")
            }
            ChunkwiseError::ConfigIo { context, reason } => {
                write!(f, "Config I/O error in {context}: {reason}")
            }
            ChunkwiseError::ConfigParse { context, reason } => {
                write!(f, "Config parse error in {context}: {reason}")
            }
            ChunkwiseError::Unavailable { context } => {
                write!(f, "System information unavailable in {context}")
            }
        }
    }
}

impl std::error::Error for ChunkwiseError {}

impl ChunkwiseError {
    pub fn invalid_argument(context: &str, reason: impl Into<String>) -> Self {
        ChunkwiseError::InvalidArgument {
            context: context.to_string(),
            reason: reason.into(),
        }
    }

    pub fn from_io_error(e: std::io::Error, context: &str) -> Self {
        ChunkwiseError::ConfigIo {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_parse_error(e: impl fmt::Display, context: &str) -> Self {
        ChunkwiseError::ConfigParse {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ChunkwiseError::InvalidArgument { .. })
    }
}
