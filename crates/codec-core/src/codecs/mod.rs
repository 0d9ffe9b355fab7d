//! Codec implementations
//!
//! - [`g711`]: stateless A-law / μ-law companding
//! - [`g726`]: stateful ADPCM over G.711 samples

#[cfg(feature = "g711")]
pub mod g711;

#[cfg(feature = "g726")]
pub mod g726;

/// Codec names this build supports
pub fn supported_codecs() -> Vec<&'static str> {
    let mut codecs = Vec::new();
    #[cfg(feature = "g711")]
    codecs.extend(["PCMA", "PCMU"]);
    #[cfg(feature = "g726")]
    codecs.extend(["G726-16", "G726-24", "G726-32", "G726-40"]);
    codecs
}
