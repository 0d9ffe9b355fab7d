//! G.711 companding engine
//!
//! Converts blocks of 16-bit sample words between linear PCM and
//! logarithmic PCM. A logarithmic word carries its 8-bit law code in the low
//! byte (0..=255), which is the layout the G.726 engine and the sample files
//! use.
//!
//! The engine is stateless: every call is a pure per-sample transform.

pub mod reference;
pub mod tables;

pub use reference::{alaw_compress, alaw_expand, ulaw_compress, ulaw_expand};
pub use tables::init_tables;

use crate::error::{CodecError, Result};
use crate::types::CompandingLaw;

/// Compress one linear sample to its law code
#[inline]
pub fn compress_sample(law: CompandingLaw, sample: i16) -> u8 {
    tables::compress_table(law, sample)
}

/// Expand one law code to a linear sample
#[inline]
pub fn expand_sample(law: CompandingLaw, code: u8) -> i16 {
    tables::expand_table(law, code)
}

/// Compress `linear` into `output` as logarithmic words
///
/// Returns the number of samples written, which is always `linear.len()`.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than the input.
pub fn compress(law: CompandingLaw, linear: &[i16], output: &mut [i16]) -> Result<usize> {
    CodecError::check_capacity(linear.len(), output.len())?;
    for (out, &sample) in output.iter_mut().zip(linear) {
        *out = i16::from(compress_sample(law, sample));
    }
    Ok(linear.len())
}

/// Expand logarithmic words in `log` into `output` as linear samples
///
/// Only the low byte of each input word is significant.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than the input.
pub fn expand(law: CompandingLaw, log: &[i16], output: &mut [i16]) -> Result<usize> {
    CodecError::check_capacity(log.len(), output.len())?;
    for (out, &word) in output.iter_mut().zip(log) {
        *out = expand_sample(law, word as u8);
    }
    Ok(log.len())
}

/// Compress a block of linear samples in place
pub fn compress_in_place(law: CompandingLaw, samples: &mut [i16]) {
    for sample in samples.iter_mut() {
        *sample = i16::from(compress_sample(law, *sample));
    }
}

/// Expand a block of logarithmic words in place
pub fn expand_in_place(law: CompandingLaw, samples: &mut [i16]) {
    for sample in samples.iter_mut() {
        *sample = expand_sample(law, *sample as u8);
    }
}

#[cfg(test)]
mod tests;
