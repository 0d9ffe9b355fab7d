//! Header pass-through
//!
//! The leading header of a sample file is opaque: it is copied to the sink
//! word for word before any frame is processed.

use crate::error::{FrameError, Result, Stage};
use crate::io::{SampleReader, SampleWriter};
use std::io::{Read, Write};

/// Copy `header_samples` words from `reader` to `writer` unmodified
///
/// A source shorter than the header copies what it has. Returns the number
/// of samples copied.
pub fn copy_header<R: Read, W: Write>(
    reader: &mut SampleReader<R>,
    writer: &mut SampleWriter<W>,
    header_samples: usize,
) -> Result<usize> {
    if header_samples == 0 {
        return Ok(0);
    }

    let mut header = vec![0i16; header_samples];
    let copied = reader
        .read_samples(&mut header)
        .map_err(|source| FrameError::Read {
            stage: Stage::Header,
            source,
        })?;

    writer
        .write_samples(&header[..copied])
        .map_err(|source| FrameError::Write {
            stage: Stage::Header,
            source,
        })?;

    if copied < header_samples {
        tracing::warn!(
            "Source holds only {} of {} header samples",
            copied,
            header_samples
        );
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn bytes(words: &[i16]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_header_copied_verbatim() {
        let words: Vec<i16> = (0..30).map(|x| x * 1111 - 7000).collect();
        let mut reader = SampleReader::new(Cursor::new(bytes(&words)));
        let mut writer = SampleWriter::new(Vec::new());

        assert_eq!(copy_header(&mut reader, &mut writer, 22).unwrap(), 22);
        assert_eq!(writer.into_inner(), bytes(&words[..22]));
    }

    #[test]
    fn test_short_source_copies_what_exists() {
        let mut reader = SampleReader::new(Cursor::new(bytes(&[1, 2, 3])));
        let mut writer = SampleWriter::new(Vec::new());

        assert_eq!(copy_header(&mut reader, &mut writer, 22).unwrap(), 3);
        assert_eq!(writer.into_inner(), bytes(&[1, 2, 3]));
    }

    #[test]
    fn test_no_header() {
        let mut reader = SampleReader::new(Cursor::new(bytes(&[1, 2, 3])));
        let mut writer = SampleWriter::new(Vec::new());

        assert_eq!(copy_header(&mut reader, &mut writer, 0).unwrap(), 0);
        assert!(writer.into_inner().is_empty());
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported_as_header_stage() {
        let mut reader = SampleReader::new(Cursor::new(bytes(&[1; 22])));
        let mut writer = SampleWriter::new(BrokenSink);

        let err = copy_header(&mut reader, &mut writer, 22).unwrap_err();
        assert!(matches!(
            err,
            FrameError::Write {
                stage: Stage::Header,
                ..
            }
        ));
    }
}
