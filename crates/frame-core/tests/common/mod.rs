//! Shared helpers for session tests

#![allow(dead_code)]

use codec_core::codecs::g711;
use codec_core::CompandingLaw;

/// A 44-byte header with recognisable contents
pub fn wav_like_header() -> Vec<i16> {
    let mut header: Vec<i16> = b"RIFF\0\0\0\0WAVEfmt "
        .chunks(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    header.resize(22, 0x5a5a);
    header
}

/// Sine wave at 8 kHz sampling
pub fn sine(len: usize, freq: f64, amplitude: f64) -> Vec<i16> {
    (0..len)
        .map(|i| (amplitude * (2.0 * std::f64::consts::PI * freq * i as f64 / 8000.0).sin()) as i16)
        .collect()
}

/// Compand linear samples into logarithmic words
pub fn to_log(law: CompandingLaw, linear: &[i16]) -> Vec<i16> {
    let mut log = vec![0; linear.len()];
    g711::compress(law, linear, &mut log).expect("output sized to input");
    log
}

/// Serialize words as little-endian bytes
pub fn to_bytes(words: &[i16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Parse little-endian bytes into words
pub fn from_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
