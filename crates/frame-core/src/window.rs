//! Frame windowing
//!
//! Selects the region of the payload a session processes: a byte offset
//! derived from the 1-based first frame, and a frame count that defaults to
//! every remaining frame, a trailing partial frame included.

use crate::error::{FrameError, Result};
use crate::SAMPLE_BYTES;
use std::io::{Seek, SeekFrom};

/// Region of the payload selected for processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWindow {
    /// Byte offset of the first frame, relative to the payload start
    pub start_offset: u64,
    /// Number of frames to process
    pub frame_count: u64,
}

impl FrameWindow {
    /// Byte offset of the 1-based frame `first_frame`
    pub fn start_offset(first_frame: u64, frame_size: usize) -> u64 {
        SAMPLE_BYTES
            .saturating_mul(first_frame.saturating_sub(1))
            .saturating_mul(frame_size as u64)
    }

    /// Compute the window over a payload of `payload_len` bytes
    ///
    /// A `requested` count of 0 selects every remaining frame. An offset at
    /// or past the end of the payload yields an empty window.
    pub fn compute(first_frame: u64, frame_size: usize, requested: u64, payload_len: u64) -> Self {
        let start_offset = Self::start_offset(first_frame, frame_size);
        let remaining = payload_len.saturating_sub(start_offset);
        let frame_bytes = SAMPLE_BYTES.saturating_mul(frame_size as u64).max(1);

        let frame_count = if remaining == 0 {
            0
        } else if requested == 0 {
            remaining.div_ceil(frame_bytes)
        } else {
            requested
        };

        Self {
            start_offset,
            frame_count,
        }
    }

    /// Whether no frame is selected
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }
}

/// Measure the total length of a seekable source in bytes
///
/// The stream position is restored afterwards.
pub fn measure<S: Seek>(source: &mut S) -> Result<u64> {
    let position = source
        .stream_position()
        .map_err(|source| FrameError::Measure { source })?;
    let len = source
        .seek(SeekFrom::End(0))
        .map_err(|source| FrameError::Measure { source })?;
    if position != len {
        source
            .seek(SeekFrom::Start(position))
            .map_err(|source| FrameError::Measure { source })?;
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_start_offset() {
        assert_eq!(FrameWindow::start_offset(1, 32), 0);
        assert_eq!(FrameWindow::start_offset(2, 32), 64);
        assert_eq!(FrameWindow::start_offset(5, 256), 2048);
    }

    #[test]
    fn test_all_remaining_frames() {
        // 10 whole frames
        let window = FrameWindow::compute(1, 32, 0, 640);
        assert_eq!(window.frame_count, 10);

        // trailing partial frame counts as one
        let window = FrameWindow::compute(1, 32, 0, 650);
        assert_eq!(window.frame_count, 11);

        let window = FrameWindow::compute(3, 32, 0, 640);
        assert_eq!(window.start_offset, 128);
        assert_eq!(window.frame_count, 8);
    }

    #[test]
    fn test_requested_count_is_kept() {
        let window = FrameWindow::compute(1, 256, 256, 100_000);
        assert_eq!(window.frame_count, 256);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let window = FrameWindow::compute(100, 32, 0, 640);
        assert!(window.is_empty());

        let window = FrameWindow::compute(11, 32, 5, 640);
        assert!(window.is_empty());

        let window = FrameWindow::compute(1, 32, 0, 0);
        assert!(window.is_empty());
    }

    #[test]
    fn test_huge_first_frame_saturates() {
        let window = FrameWindow::compute(u64::MAX, usize::MAX, 0, 640);
        assert_eq!(window.start_offset, u64::MAX);
        assert!(window.is_empty());
    }

    #[test]
    fn test_measure_restores_position() {
        let mut cursor = Cursor::new(vec![0u8; 100]);
        cursor.set_position(10);
        assert_eq!(measure(&mut cursor).unwrap(), 100);
        assert_eq!(cursor.position(), 10);
    }

    struct Unmeasurable;

    impl Read for Unmeasurable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Ok(0)
        }
    }

    impl Seek for Unmeasurable {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "not seekable"))
        }
    }

    #[test]
    fn test_measure_failure() {
        let err = measure(&mut Unmeasurable).unwrap_err();
        assert!(matches!(err, FrameError::Measure { .. }));
    }
}
