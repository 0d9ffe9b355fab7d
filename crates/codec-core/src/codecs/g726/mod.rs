//! G.726 ADPCM engine (16, 24, 32 and 40 kbit/s)
//!
//! This implementation takes G.711 logarithmic samples on input and produces
//! G.711 logarithmic samples on output, the way the ITU-T reference does:
//! linear PCM must be companded before encoding and expanded after decoding.
//!
//! # Architecture
//!
//! - `codec`: block encode/decode entry points
//! - `adpcm`: predictor, quantizer and adaptation blocks
//! - `tables`: per-rate quantizer tables
//! - `state`: per-stage state
//!
//! # Example
//! ```
//! use codec_core::codecs::g726::{self, G726State};
//! use codec_core::types::{BitRate, CompandingLaw};
//!
//! let log = vec![0xd5i16; 80];
//! let mut codes = vec![0i16; 80];
//! let mut decoded = vec![0i16; 80];
//! let mut enc = G726State::new();
//! let mut dec = G726State::new();
//!
//! g726::encode(&log, &mut codes, CompandingLaw::ALaw, BitRate::Kbps32, true, &mut enc).unwrap();
//! g726::decode(&codes, &mut decoded, CompandingLaw::ALaw, BitRate::Kbps32, true, &mut dec).unwrap();
//! assert_eq!(decoded.len(), 80);
//! ```

mod adpcm;
pub mod codec;
pub mod state;
pub mod tables;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode};
pub use state::G726State;
pub use tables::RateTables;
