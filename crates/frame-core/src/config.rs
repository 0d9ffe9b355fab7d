//! Session configuration
//!
//! A [`SessionConfig`] is assembled through [`SessionConfigBuilder`] and
//! validated once; after `build()` nothing about the session can change.

use crate::error::{FrameError, Result};
use codec_core::{BitRate, CodecError, CompandingLaw};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default frame size in samples
pub const DEFAULT_FRAME_SIZE: usize = 32;

/// Largest accepted frame size in samples (one minute at 8 kHz)
pub const MAX_FRAME_SIZE: usize = 480_000;

/// Default pass-through header size in samples (a canonical 44-byte WAV header)
pub const DEFAULT_HEADER_SAMPLES: usize = 22;

/// Sample law of the files on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Law {
    /// A-law logarithmic samples
    #[default]
    A,
    /// μ-law logarithmic samples
    Mu,
    /// 16-bit linear PCM; the codec runs on A-law internally
    Linear,
}

impl Law {
    /// Companding law the codec stages run on
    pub fn codec_law(self) -> CompandingLaw {
        match self {
            Self::A | Self::Linear => CompandingLaw::ALaw,
            Self::Mu => CompandingLaw::MuLaw,
        }
    }

    /// Whether samples on disk are linear PCM
    pub fn is_linear(self) -> bool {
        self == Self::Linear
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A-law"),
            Self::Mu => write!(f, "u-law"),
            Self::Linear => write!(f, "linear PCM"),
        }
    }
}

impl FromStr for Law {
    type Err = CodecError;

    /// Only the first letter is significant (`a`, `u`, `l`, any case);
    /// `mu` is accepted as well.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("mu") || trimmed.starts_with('µ') {
            return Ok(Self::Mu);
        }
        match trimmed.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(Self::A),
            Some('U') => Ok(Self::Mu),
            Some('L') => Ok(Self::Linear),
            _ => Err(CodecError::invalid_law(s)),
        }
    }
}

impl TryFrom<String> for Law {
    type Error = CodecError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which codec stages run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Encoder only: samples in, ADPCM codes out
    Encode,
    /// Decoder only: ADPCM codes in, samples out
    Decode,
    /// Encoder then decoder (tandem)
    #[default]
    Both,
}

impl Mode {
    /// Whether the encoder stage runs
    pub fn encodes(self) -> bool {
        matches!(self, Self::Encode | Self::Both)
    }

    /// Whether the decoder stage runs
    pub fn decodes(self) -> bool {
        matches!(self, Self::Decode | Self::Both)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
            Self::Both => write!(f, "encode+decode"),
        }
    }
}

/// Bit rates applied to successive frames, cycled
///
/// Never empty. A single-entry schedule is a fixed rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSchedule {
    rates: Vec<BitRate>,
}

impl RateSchedule {
    /// Fixed-rate schedule
    pub fn single(rate: BitRate) -> Self {
        Self { rates: vec![rate] }
    }

    /// Schedule cycling through `rates`
    pub fn cycle(rates: Vec<BitRate>) -> Result<Self> {
        if rates.is_empty() {
            return Err(FrameError::config("rate schedule must not be empty"));
        }
        Ok(Self { rates })
    }

    /// Parse a rate option: `32` or a dash-separated list such as `32-24`
    ///
    /// Parsing never fails. Any entry that is not one of 16, 24, 32 or 40
    /// is replaced by the default 32 kbit/s with a warning.
    pub fn parse(option: &str) -> Self {
        let rates = option.trim().split('-').map(parse_rate_entry).collect();
        Self { rates }
    }

    /// Rate used for the frame with 0-based index `frame`
    pub fn rate_for_frame(&self, frame: u64) -> BitRate {
        self.rates[(frame % self.rates.len() as u64) as usize]
    }

    /// All entries in order
    pub fn rates(&self) -> &[BitRate] {
        &self.rates
    }

    /// Whether the schedule has a single entry
    pub fn is_fixed(&self) -> bool {
        self.rates.len() == 1
    }
}

fn parse_rate_entry(entry: &str) -> BitRate {
    let parsed = entry
        .trim()
        .parse::<u32>()
        .map_err(CodecError::from)
        .and_then(BitRate::from_kbps);
    match parsed {
        Ok(rate) => rate,
        Err(err) => {
            tracing::warn!("Unsupported rate {:?} ({}); using default {}", entry, err, BitRate::default());
            BitRate::default()
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::single(BitRate::default())
    }
}

impl From<BitRate> for RateSchedule {
    fn from(rate: BitRate) -> Self {
        Self::single(rate)
    }
}

impl fmt::Display for RateSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rate) in self.rates.iter().enumerate() {
            if index > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", rate.kbps())?;
        }
        write!(f, " kbit/s")
    }
}

/// Validated, immutable session parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    law: Law,
    mode: Mode,
    rates: RateSchedule,
    reset: bool,
    frame_size: usize,
    first_frame: u64,
    frame_count: u64,
    header_samples: usize,
}

impl SessionConfig {
    /// Start building a configuration from defaults
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Sample law on disk
    pub fn law(&self) -> Law {
        self.law
    }

    /// Active codec stages
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Per-frame bit rates
    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    /// Whether codec state is reset before the first frame
    pub fn reset(&self) -> bool {
        self.reset
    }

    /// Samples per frame
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// 1-based index of the first frame to process
    pub fn first_frame(&self) -> u64 {
        self.first_frame
    }

    /// Frames to process; 0 means all remaining
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Pass-through header size in samples
    pub fn header_samples(&self) -> usize {
        self.header_samples
    }

    /// Pass-through header size in bytes
    pub fn header_bytes(&self) -> u64 {
        self.header_samples as u64 * crate::SAMPLE_BYTES
    }
}

/// Builder for [`SessionConfig`]
#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    law: Law,
    mode: Mode,
    rates: RateSchedule,
    reset: bool,
    frame_size: usize,
    first_frame: u64,
    frame_count: u64,
    header_samples: usize,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self {
            law: Law::default(),
            mode: Mode::default(),
            rates: RateSchedule::default(),
            reset: true,
            frame_size: DEFAULT_FRAME_SIZE,
            first_frame: 1,
            frame_count: 0,
            header_samples: DEFAULT_HEADER_SAMPLES,
        }
    }
}

impl SessionConfigBuilder {
    /// Set the sample law on disk
    pub fn law(mut self, law: Law) -> Self {
        self.law = law;
        self
    }

    /// Set the active codec stages
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Use one rate for every frame
    pub fn rate(mut self, rate: BitRate) -> Self {
        self.rates = RateSchedule::single(rate);
        self
    }

    /// Set the per-frame rate schedule
    pub fn rates(mut self, rates: RateSchedule) -> Self {
        self.rates = rates;
        self
    }

    /// Enable or disable the first-frame reset
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// Set the frame size in samples
    pub fn frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Set the 1-based first frame index
    pub fn first_frame(mut self, first_frame: u64) -> Self {
        self.first_frame = first_frame;
        self
    }

    /// Set the number of frames to process (0 = all remaining)
    pub fn frame_count(mut self, frame_count: u64) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set the pass-through header size in samples
    pub fn header_samples(mut self, header_samples: usize) -> Self {
        self.header_samples = header_samples;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SessionConfig> {
        if self.frame_size == 0 {
            return Err(FrameError::config("frame size must be at least 1 sample"));
        }
        if self.frame_size > MAX_FRAME_SIZE {
            return Err(FrameError::config(format!(
                "frame size {} exceeds the limit of {} samples",
                self.frame_size, MAX_FRAME_SIZE
            )));
        }
        if self.first_frame == 0 {
            return Err(FrameError::config("first frame index is 1-based; got 0"));
        }

        Ok(SessionConfig {
            law: self.law,
            mode: self.mode,
            rates: self.rates,
            reset: self.reset,
            frame_size: self.frame_size,
            first_frame: self.first_frame,
            frame_count: self.frame_count,
            header_samples: self.header_samples,
        })
    }
}
