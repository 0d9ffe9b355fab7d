//! # Frame-Core: windowed G.726 transcoding sessions
//!
//! Drives a 16-bit sample stream through G.711 companding and G.726 ADPCM,
//! frame by frame, the way codec conformance runs are done: a fixed-size
//! header is passed through, a window of frames is selected, and each frame
//! is read, transcoded and written back in order.
//!
//! ## Components
//!
//! - [`config`]: session parameters, validated once by a builder
//! - [`format`]: (mode, law) → input/output representation
//! - [`window`]: first-frame offset and frame count
//! - [`copier`]: header pass-through
//! - [`transcoder`]: per-frame engine with the one-shot reset
//! - [`session`]: the read → transcode → write loop
//!
//! ## Usage
//!
//! ```rust
//! use frame_core::{Law, Mode, Session, SessionConfig};
//! use std::io::Cursor;
//!
//! let config = SessionConfig::builder()
//!     .law(Law::Linear)
//!     .mode(Mode::Encode)
//!     .frame_size(160)
//!     .header_samples(0)
//!     .build()?;
//!
//! let pcm: Vec<u8> = (0..320i16).flat_map(|s| (s * 50).to_le_bytes()).collect();
//! let mut codes = Vec::new();
//! let report = Session::new(config).run(Cursor::new(pcm), &mut codes)?;
//! assert_eq!(report.frames, 2);
//! assert_eq!(codes.len(), 640);
//! # Ok::<(), frame_core::FrameError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod copier;
pub mod error;
pub mod format;
pub mod io;
pub mod session;
pub mod transcoder;
pub mod window;

pub use config::{Law, Mode, RateSchedule, SessionConfig, SessionConfigBuilder};
pub use error::{ErrorCategory, FrameError, Result, Stage};
pub use format::{FormatPlan, SampleRepresentation};
pub use session::{Session, SessionReport};
pub use transcoder::BlockTranscoder;
pub use window::FrameWindow;

/// Bytes per sample word on disk
pub const SAMPLE_BYTES: u64 = 2;

/// Run one session from `source` into `sink`
pub fn transcode<R, W>(config: SessionConfig, source: R, sink: W) -> Result<SessionReport>
where
    R: std::io::Read + std::io::Seek,
    W: std::io::Write,
{
    Session::new(config).run(source, sink)
}
