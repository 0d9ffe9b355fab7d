//! Transcoding sessions
//!
//! A [`Session`] drives one source through the pipeline:
//!
//! 1. measure the source
//! 2. copy the header from the start of the stream
//! 3. window the payload and seek to the first frame
//! 4. read, transcode and write frame by frame
//!
//! The session ends when the window is exhausted or the source runs dry.

use crate::config::SessionConfig;
use crate::copier;
use crate::error::{FrameError, Result, Stage};
use crate::io::{SampleReader, SampleWriter};
use crate::transcoder::BlockTranscoder;
use crate::window::{self, FrameWindow};
use crate::SAMPLE_BYTES;
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::{debug, info, warn};

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Window computed for the payload
    pub window: FrameWindow,
    /// Frames transcoded
    pub frames: u64,
    /// Payload samples transcoded
    pub samples: u64,
    /// Header samples copied
    pub header_samples: usize,
    /// Source ran out before the window did
    pub stopped_early: bool,
}

/// One run of the transcoding pipeline
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    transcoder: BlockTranscoder,
}

impl Session {
    /// Create a session, allocating its buffers and codec states
    pub fn new(config: SessionConfig) -> Self {
        let transcoder = BlockTranscoder::new(&config);
        Self { config, transcoder }
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session from `source` into `sink`
    ///
    /// Whatever was written before a failure stays in the sink.
    pub fn run<R, W>(mut self, mut source: R, sink: W) -> Result<SessionReport>
    where
        R: Read + Seek,
        W: Write,
    {
        let config = &self.config;
        info!(
            "Session: {}, {}, {}, reset {}, frames of {} samples",
            config.mode(),
            self.transcoder.plan(),
            config.rates(),
            if config.reset() { "on" } else { "off" },
            config.frame_size()
        );

        let source_len = window::measure(&mut source)?;
        seek(&mut source, 0)?;

        let mut reader = SampleReader::new(source);
        let mut writer = SampleWriter::new(sink);
        let header_samples = copier::copy_header(&mut reader, &mut writer, config.header_samples())?;

        let header_bytes = config.header_bytes();
        // a trailing odd byte is never read, so it can't open a frame
        let payload_len = source_len.saturating_sub(header_bytes) / SAMPLE_BYTES * SAMPLE_BYTES;
        let window = FrameWindow::compute(
            config.first_frame(),
            config.frame_size(),
            config.frame_count(),
            payload_len,
        );
        info!(
            "Window: frame {} at payload byte {}, {} frame(s) of {} payload bytes",
            config.first_frame(),
            window.start_offset,
            window.frame_count,
            payload_len
        );

        let mut report = SessionReport {
            window,
            frames: 0,
            samples: 0,
            header_samples,
            stopped_early: false,
        };

        if window.is_empty() {
            warn!(
                "First frame {} starts past the end of the payload; no frames to process",
                config.first_frame()
            );
        } else {
            seek(reader.get_mut(), header_bytes.saturating_add(window.start_offset))?;
        }

        let frame_size = config.frame_size();
        for index in 0..window.frame_count {
            let n = reader
                .read_samples(&mut self.transcoder.input_mut()[..frame_size])
                .map_err(|source| FrameError::Read {
                    stage: Stage::Frame(index),
                    source,
                })?;
            if n == 0 {
                debug!("Source depleted before frame {}", index);
                report.stopped_early = true;
                break;
            }

            let output = self.transcoder.process_frame(n)?;
            writer
                .write_samples(output)
                .map_err(|source| FrameError::Write {
                    stage: Stage::Frame(index),
                    source,
                })?;

            report.frames += 1;
            report.samples += n as u64;
        }

        writer.flush().map_err(|source| FrameError::Write {
            stage: Stage::Flush,
            source,
        })?;

        info!(
            "Done: {} frame(s), {} sample(s), {} header sample(s){}",
            report.frames,
            report.samples,
            report.header_samples,
            if report.stopped_early { ", source ended early" } else { "" }
        );
        Ok(report)
    }
}

fn seek<S: Seek>(source: &mut S, offset: u64) -> Result<()> {
    source
        .seek(SeekFrom::Start(offset))
        .map_err(|source| FrameError::Seek { offset, source })?;
    Ok(())
}
