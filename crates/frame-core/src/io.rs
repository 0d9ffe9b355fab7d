//! Sample stream I/O
//!
//! Moves 16-bit little-endian sample words between byte streams and `i16`
//! buffers. The byte scratch space is owned by the reader/writer and grows
//! only when a larger block than before is transferred.

use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, Read, Write};

use crate::SAMPLE_BYTES;

const WORD: usize = SAMPLE_BYTES as usize;

/// Reads sample words from a byte source
#[derive(Debug)]
pub struct SampleReader<R> {
    inner: R,
    bytes: Vec<u8>,
}

impl<R: Read> SampleReader<R> {
    /// Wrap a byte source
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes: Vec::new(),
        }
    }

    /// Read up to `buf.len()` samples
    ///
    /// Keeps reading until the buffer is full or the source is exhausted, so
    /// a short count means end of data. A trailing odd byte is dropped.
    pub fn read_samples(&mut self, buf: &mut [i16]) -> io::Result<usize> {
        let wanted = buf.len() * WORD;
        if self.bytes.len() < wanted {
            self.bytes.resize(wanted, 0);
        }

        let mut filled = 0;
        while filled < wanted {
            match self.inner.read(&mut self.bytes[filled..wanted]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        let samples = filled / WORD;
        LittleEndian::read_i16_into(&self.bytes[..samples * WORD], &mut buf[..samples]);
        Ok(samples)
    }

    /// Access the underlying source
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the underlying source
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Writes sample words to a byte sink
#[derive(Debug)]
pub struct SampleWriter<W> {
    inner: W,
    bytes: Vec<u8>,
}

impl<W: Write> SampleWriter<W> {
    /// Wrap a byte sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: Vec::new(),
        }
    }

    /// Write every sample in `buf`
    pub fn write_samples(&mut self, buf: &[i16]) -> io::Result<()> {
        let len = buf.len() * WORD;
        if self.bytes.len() < len {
            self.bytes.resize(len, 0);
        }
        LittleEndian::write_i16_into(buf, &mut self.bytes[..len]);
        self.inner.write_all(&self.bytes[..len])
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}
