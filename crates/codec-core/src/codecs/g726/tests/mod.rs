//! G.726 Test Modules
//!
//! Shared signal helpers live here; the test files pull them in with
//! `use super::*`.


use crate::codecs::g711;
use crate::types::CompandingLaw;

/// Linear sine at 8 kHz sampling
pub(crate) fn sine(len: usize, freq: f64, amplitude: f64) -> Vec<i16> {
    (0..len)
        .map(|n| {
            let t = n as f64 / 8000.0;
            (amplitude * (2.0 * std::f64::consts::PI * freq * t).sin()).round() as i16
        })
        .collect()
}

/// Compand a linear signal to logarithmic words
pub(crate) fn to_log(law: CompandingLaw, linear: &[i16]) -> Vec<i16> {
    let mut log = vec![0i16; linear.len()];
    g711::compress(law, linear, &mut log).unwrap();
    log
}

/// Expand logarithmic words to a linear signal
pub(crate) fn to_linear(law: CompandingLaw, log: &[i16]) -> Vec<i16> {
    let mut linear = vec![0i16; log.len()];
    g711::expand(law, log, &mut linear).unwrap();
    linear
}

/// Signal-to-noise ratio in dB of `decoded` against `reference`
pub(crate) fn snr_db(reference: &[i16], decoded: &[i16]) -> f64 {
    let signal: f64 = reference.iter().map(|&s| f64::from(s).powi(2)).sum();
    let noise: f64 = reference
        .iter()
        .zip(decoded)
        .map(|(&r, &d)| (f64::from(r) - f64::from(d)).powi(2))
        .sum();
    if noise == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal / noise).log10()
}
