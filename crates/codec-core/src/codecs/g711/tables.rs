//! G.711 Lookup Tables
//!
//! Pre-computed conversion tables for both laws, generated once from the
//! reference routines.
//!
//! ## Memory Usage
//!
//! - encode tables: 2 × 65536 bytes
//! - decode tables: 2 × 512 bytes

use crate::codecs::g711::reference::*;
use crate::types::CompandingLaw;
use std::sync::LazyLock;

/// Pre-computed μ-law encoding table (16-bit linear → 8-bit μ-law)
static MULAW_ENCODE_TABLE: LazyLock<Box<[u8; 65536]>> =
    LazyLock::new(|| build_encode_table(ulaw_compress));

/// Pre-computed μ-law decoding table (8-bit μ-law → 16-bit linear)
static MULAW_DECODE_TABLE: LazyLock<[i16; 256]> = LazyLock::new(|| build_decode_table(ulaw_expand));

/// Pre-computed A-law encoding table (16-bit linear → 8-bit A-law)
static ALAW_ENCODE_TABLE: LazyLock<Box<[u8; 65536]>> =
    LazyLock::new(|| build_encode_table(alaw_compress));

/// Pre-computed A-law decoding table (8-bit A-law → 16-bit linear)
static ALAW_DECODE_TABLE: LazyLock<[i16; 256]> = LazyLock::new(|| build_decode_table(alaw_expand));

fn build_encode_table(compress: fn(i16) -> u8) -> Box<[u8; 65536]> {
    let mut table = Box::new([0u8; 65536]);
    for (index, slot) in table.iter_mut().enumerate() {
        *slot = compress(table_sample(index));
    }
    table
}

fn build_decode_table(expand: fn(u8) -> i16) -> [i16; 256] {
    let mut table = [0i16; 256];
    for (code, slot) in table.iter_mut().enumerate() {
        *slot = expand(code as u8);
    }
    table
}

/// Map an encode-table index back to the signed sample it covers
fn table_sample(index: usize) -> i16 {
    (index as u16).wrapping_sub(32768) as i16
}

fn table_index(sample: i16) -> usize {
    (sample as u16).wrapping_add(32768) as usize
}

/// Force generation of all four tables
pub fn init_tables() {
    LazyLock::force(&MULAW_ENCODE_TABLE);
    LazyLock::force(&MULAW_DECODE_TABLE);
    LazyLock::force(&ALAW_ENCODE_TABLE);
    LazyLock::force(&ALAW_DECODE_TABLE);
}

/// O(1) compression of one linear sample
#[inline]
pub fn compress_table(law: CompandingLaw, sample: i16) -> u8 {
    match law {
        CompandingLaw::ALaw => ALAW_ENCODE_TABLE[table_index(sample)],
        CompandingLaw::MuLaw => MULAW_ENCODE_TABLE[table_index(sample)],
    }
}

/// O(1) expansion of one law code
#[inline]
pub fn expand_table(law: CompandingLaw, code: u8) -> i16 {
    match law {
        CompandingLaw::ALaw => ALAW_DECODE_TABLE[code as usize],
        CompandingLaw::MuLaw => MULAW_DECODE_TABLE[code as usize],
    }
}
