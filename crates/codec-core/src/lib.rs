//! # Codec-Core: G.711 and G.726 engines
//!
//! Sample-word codecs used by the frame harness. Every buffer is a slice of
//! 16-bit words, whatever it represents:
//!
//! - linear PCM: the word is the sample
//! - logarithmic PCM: the G.711 code sits in the low byte
//! - ADPCM: the G.726 code word sits in the low 2..5 bits
//!
//! ## Features
//!
//! - **G.711 (PCMA/PCMU)**: ITU-T reference conversions with lookup tables
//! - **G.726**: 16/24/32/40 kbit/s ADPCM with synchronous coding adjustment
//!
//! ## Usage
//!
//! ```rust
//! use codec_core::codecs::{g711, g726};
//! use codec_core::{BitRate, CompandingLaw, G726State};
//!
//! let linear = vec![0i16, 1000, -1000, 4000];
//! let mut log = vec![0i16; 4];
//! g711::compress(CompandingLaw::ALaw, &linear, &mut log)?;
//!
//! let mut state = G726State::new();
//! let mut codes = vec![0i16; 4];
//! g726::encode(&log, &mut codes, CompandingLaw::ALaw, BitRate::Kbps32, true, &mut state)?;
//! # Ok::<(), codec_core::CodecError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `g711`: G.711 companding (enabled by default)
//! - `g726`: G.726 ADPCM, implies `g711` (enabled by default)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CodecError, Result};
pub use types::{BitRate, CompandingLaw};

#[cfg(feature = "g726")]
pub use codecs::g726::G726State;

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// Builds the G.711 lookup tables up front so the first frame does not pay
/// for them. Safe to call multiple times.
pub fn init() {
    #[cfg(feature = "g711")]
    codecs::g711::init_tables();

    tracing::debug!("Codec-Core v{} initialized", VERSION);
    tracing::debug!("Supported codecs: {:?}", codecs::supported_codecs());
}
