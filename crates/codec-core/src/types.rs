//! Core types shared by the codec engines
//!
//! This module defines the parameters that select how the G.711 and G.726
//! engines interpret a block of samples: the companding law and the ADPCM
//! bit rate class.

use crate::error::{CodecError, Result};
use std::fmt;
use std::str::FromStr;

/// Sampling rate every engine in this crate assumes (narrowband telephony)
pub const SAMPLE_RATE: u32 = 8000;

/// G.711 companding law used for logarithmic samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompandingLaw {
    /// G.711 A-law (even bits inverted, as on the wire)
    ALaw,
    /// G.711 μ-law
    MuLaw,
}

impl CompandingLaw {
    /// Get the law name
    pub fn name(self) -> &'static str {
        match self {
            Self::ALaw => "A-law",
            Self::MuLaw => "u-law",
        }
    }
}

impl fmt::Display for CompandingLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// G.726 bit rate class
///
/// The discriminant is the number of bits per ADPCM code word, which is the
/// classification ITU-T uses for 8000 samples/s operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitRate {
    /// 16 kbit/s, 2-bit codes
    Kbps16 = 2,
    /// 24 kbit/s, 3-bit codes
    Kbps24 = 3,
    /// 32 kbit/s, 4-bit codes
    Kbps32 = 4,
    /// 40 kbit/s, 5-bit codes
    Kbps40 = 5,
}

impl BitRate {
    /// All supported rates, lowest first
    pub const ALL: [BitRate; 4] = [Self::Kbps16, Self::Kbps24, Self::Kbps32, Self::Kbps40];

    /// Bits per ADPCM code word (2..=5)
    pub fn code_bits(self) -> u8 {
        self as u8
    }

    /// Bit rate in kbit/s
    pub fn kbps(self) -> u32 {
        u32::from(self.code_bits()) * SAMPLE_RATE / 1000
    }

    /// Look up a rate by its kbit/s value
    pub fn from_kbps(kbps: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.kbps() == kbps)
            .ok_or(CodecError::UnsupportedBitrate { kbps })
    }

    /// Look up a rate by its code word size in bits
    pub fn from_code_bits(bits: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.code_bits() == bits)
            .ok_or_else(|| CodecError::invalid_config(format!("no G.726 rate uses {bits}-bit codes")))
    }

    /// Mask selecting the valid bits of a code word
    pub fn code_mask(self) -> i16 {
        (1 << self.code_bits()) - 1
    }
}

impl Default for BitRate {
    fn default() -> Self {
        Self::Kbps32
    }
}

impl fmt::Display for BitRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kbit/s", self.kbps())
    }
}

impl FromStr for BitRate {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let kbps = s.trim().parse::<u32>()?;
        Self::from_kbps(kbps)
    }
}
