//! G.726 block interface
//!
//! Word-oriented encode and decode over a block of samples. The caller owns
//! the [`G726State`] and passes it by `&mut`; one state per stage.

use crate::codecs::g726::adpcm;
use crate::codecs::g726::state::G726State;
use crate::codecs::g726::tables::RateTables;
use crate::error::{CodecError, Result};
use crate::types::{BitRate, CompandingLaw};

/// Encode logarithmic samples into ADPCM code words
///
/// `input` holds G.711 codes of `law` in the low byte of each word. One code
/// word per input sample is written to `output`. When `reset` is true the
/// state is reinitialized before the first sample of this block.
///
/// Returns the number of code words written.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than `input`.
pub fn encode(
    input: &[i16],
    output: &mut [i16],
    law: CompandingLaw,
    rate: BitRate,
    reset: bool,
    state: &mut G726State,
) -> Result<usize> {
    CodecError::check_capacity(input.len(), output.len())?;
    if reset {
        state.reset();
    }

    let tables = RateTables::for_rate(rate);
    for (out, &word) in output.iter_mut().zip(input) {
        *out = adpcm::encode_sample(law, word as u8, tables, state) as i16;
    }
    Ok(input.len())
}

/// Decode ADPCM code words into logarithmic samples
///
/// Bits above the code width of `rate` are ignored. Each output word holds a
/// G.711 code of `law` after synchronous coding adjustment, so a tandem
/// encode→decode→encode chain reproduces the same code words.
///
/// Returns the number of samples written.
///
/// # Errors
///
/// Returns [`CodecError::BufferTooSmall`] if `output` is shorter than `input`.
pub fn decode(
    input: &[i16],
    output: &mut [i16],
    law: CompandingLaw,
    rate: BitRate,
    reset: bool,
    state: &mut G726State,
) -> Result<usize> {
    CodecError::check_capacity(input.len(), output.len())?;
    if reset {
        state.reset();
    }

    let tables = RateTables::for_rate(rate);
    for (out, &code) in output.iter_mut().zip(input) {
        *out = i16::from(adpcm::decode_sample(law, i32::from(code), tables, state));
    }
    Ok(input.len())
}
