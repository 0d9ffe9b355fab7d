//! Error handling for the codec library
//!
//! This module defines the error types that can occur while configuring or
//! running the G.711 and G.726 engines.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid codec configuration
    #[error("Invalid codec configuration: {details}")]
    InvalidConfig { details: String },

    /// Bit rate outside the G.726 set
    #[error("Unsupported bit rate: {kbps} kbit/s (supported: 16, 24, 32, 40)")]
    UnsupportedBitrate { kbps: u32 },

    /// Unknown companding law designation
    #[error("Invalid companding law: {law:?} (expected A, u or linear)")]
    InvalidLaw { law: String },

    /// Output buffer cannot hold the converted block
    #[error("Buffer too small: need {needed} samples, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Number parsing failed
    #[error("Parse failed: {reason}")]
    ParseError { reason: String },
}

impl CodecError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new invalid law error
    pub fn invalid_law(law: impl Into<String>) -> Self {
        Self::InvalidLaw { law: law.into() }
    }

    /// Fail unless `output` can hold `needed` samples
    pub fn check_capacity(needed: usize, actual: usize) -> Result<()> {
        if actual < needed {
            return Err(Self::BufferTooSmall { needed, actual });
        }
        Ok(())
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. }
            | Self::UnsupportedBitrate { .. }
            | Self::InvalidLaw { .. }
            | Self::ParseError { .. } => ErrorCategory::Configuration,

            Self::BufferTooSmall { .. } => ErrorCategory::Memory,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Buffer sizing errors
    Memory,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}

/// Convert from parsing errors
impl From<std::num::ParseIntError> for CodecError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::ParseError {
            reason: error.to_string(),
        }
    }
}
