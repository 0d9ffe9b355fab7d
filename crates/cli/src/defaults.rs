//! Optional TOML defaults file
//!
//! ```toml
//! law = "u"
//! rate = "32-24"      # or rate = 24
//! mode = "encode"     # encode | decode | both
//! reset = false
//! frame_size = 160
//! header_samples = 0
//! ```
//!
//! Command-line values always win over the file.

use anyhow::{Context, Result};
use frame_core::{Law, Mode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Rate as written in the file: a number or a schedule string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RateSetting {
    Kbps(u32),
    Schedule(String),
}

impl RateSetting {
    /// Same text the `--rate` option takes
    pub fn to_option(&self) -> String {
        match self {
            Self::Kbps(kbps) => kbps.to_string(),
            Self::Schedule(schedule) => schedule.clone(),
        }
    }
}

/// Values loaded from the defaults file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub law: Option<Law>,
    pub rate: Option<RateSetting>,
    pub mode: Option<Mode>,
    pub reset: Option<bool>,
    pub frame_size: Option<usize>,
    pub header_samples: Option<usize>,
}

impl Defaults {
    /// `<config_dir>/g726-frames/defaults.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("g726-frames").join("defaults.toml"))
    }

    /// Parse a defaults file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Malformed defaults file {}", path.display()))
    }

    /// Load `explicit` if given, else the default file when it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using defaults from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
