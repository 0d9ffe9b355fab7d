//! Error handling for transcoding sessions
//!
//! Every [`FrameError`] ends the session. I/O variants record the stage that
//! failed so the operator can tell a truncated header from a bad frame.

#![allow(missing_docs)]

use codec_core::CodecError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, FrameError>;

/// Point in the session where a transfer failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Pass-through header block
    Header,
    /// Frame with the given 0-based index within the window
    Frame(u64),
    /// Final flush of the sink
    Flush,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Frame(index) => write!(f, "frame {}", index),
            Self::Flush => write!(f, "final flush"),
        }
    }
}

/// Error type for session operations
#[derive(Error, Debug)]
pub enum FrameError {
    /// Session parameters rejected before any I/O
    #[error("Invalid session configuration: {details}")]
    Config { details: String },

    /// Source length could not be determined
    #[error("Failed to measure source: {source}")]
    Measure {
        #[source]
        source: io::Error,
    },

    /// Source could not be positioned
    #[error("Failed to seek source to byte {offset}: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// Reading from the source failed
    #[error("Failed to read {stage} from source: {source}")]
    Read {
        stage: Stage,
        #[source]
        source: io::Error,
    },

    /// Writing to the sink failed
    #[error("Failed to write {stage} to sink: {source}")]
    Write {
        stage: Stage,
        #[source]
        source: io::Error,
    },

    /// Codec engine rejected a block or a parameter
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl FrameError {
    /// Create a new configuration error
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config {
            details: details.into(),
        }
    }

    /// Stage of a failed transfer, if this is a transfer error
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Read { stage, .. } | Self::Write { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Measure { .. } | Self::Seek { .. } => ErrorCategory::Resource,
            Self::Read { .. } | Self::Write { .. } => ErrorCategory::Transfer,
            Self::Codec(_) => ErrorCategory::Codec,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected parameters
    Configuration,
    /// Source could not be measured or positioned
    Resource,
    /// Sample transfer failed mid-session
    Transfer,
    /// Codec engine failure
    Codec,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Resource => write!(f, "Resource"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Codec => write!(f, "Codec"),
        }
    }
}
