//! Per-frame transcoding engine
//!
//! [`BlockTranscoder`] owns every buffer and codec state a session needs.
//! Each call to [`BlockTranscoder::process_frame`] takes the `n` samples
//! placed in the input buffer along the classifier's path:
//!
//! 1. linear → A-law when the input is linear
//! 2. encoder, decoder, or encoder into the intermediate buffer then decoder
//! 3. log → linear when the output is linear
//!
//! The first-frame reset is a one-shot gate: the codec engines see
//! `reset = true` on the first processed frame only, and only when the
//! session enables it.

use crate::config::{Mode, RateSchedule, SessionConfig};
use crate::error::Result;
use crate::format::FormatPlan;
use codec_core::codecs::{g711, g726};
use codec_core::{BitRate, G726State};
use tracing::debug;

/// One-shot reset gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetGate {
    /// Reset not yet applied; the next frame resets
    Pending,
    /// Reset applied or disabled; no frame resets
    Applied,
}

impl ResetGate {
    fn new(enabled: bool) -> Self {
        if enabled { Self::Pending } else { Self::Applied }
    }

    /// Reset flag for the next frame, closing the gate
    fn take(&mut self) -> bool {
        std::mem::replace(self, Self::Applied) == Self::Pending
    }
}

/// Frame-at-a-time transcoder
#[derive(Debug)]
pub struct BlockTranscoder {
    plan: FormatPlan,
    mode: Mode,
    rates: RateSchedule,
    reset: ResetGate,
    encoder: G726State,
    decoder: G726State,
    input: Vec<i16>,
    intermediate: Vec<i16>,
    output: Vec<i16>,
    frames: u64,
}

impl BlockTranscoder {
    /// Allocate buffers and codec states for a session
    pub fn new(config: &SessionConfig) -> Self {
        let frame_size = config.frame_size();
        let intermediate = if config.mode() == Mode::Both {
            vec![0; frame_size]
        } else {
            Vec::new()
        };

        Self {
            plan: FormatPlan::classify(config.mode(), config.law()),
            mode: config.mode(),
            rates: config.rates().clone(),
            reset: ResetGate::new(config.reset()),
            encoder: G726State::new(),
            decoder: G726State::new(),
            input: vec![0; frame_size],
            intermediate,
            output: vec![0; frame_size],
            frames: 0,
        }
    }

    /// Processing path
    pub fn plan(&self) -> FormatPlan {
        self.plan
    }

    /// Frame capacity in samples
    pub fn frame_size(&self) -> usize {
        self.input.len()
    }

    /// Input buffer to fill before [`process_frame`](Self::process_frame)
    pub fn input_mut(&mut self) -> &mut [i16] {
        &mut self.input
    }

    /// Number of frames processed so far
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Rate the next frame will use
    pub fn next_rate(&self) -> BitRate {
        self.rates.rate_for_frame(self.frames)
    }

    /// Encoder state
    pub fn encoder_state(&self) -> &G726State {
        &self.encoder
    }

    /// Decoder state
    pub fn decoder_state(&self) -> &G726State {
        &self.decoder
    }

    /// Transcode the first `n` samples of the input buffer
    ///
    /// Returns the `n` output samples. `n` is clamped to the frame size.
    pub fn process_frame(&mut self, n: usize) -> Result<&[i16]> {
        let n = n.min(self.input.len());
        let law = self.plan.codec_law;
        let rate = self.next_rate();
        let reset = self.reset.take();

        debug!(
            "Frame {}: {} samples at {}{}",
            self.frames,
            n,
            rate,
            if reset { ", reset" } else { "" }
        );

        let input = &mut self.input[..n];
        if self.plan.compress_input() {
            g711::compress_in_place(law, input);
        }

        let output = &mut self.output[..n];
        match self.mode {
            Mode::Encode => {
                g726::encode(input, output, law, rate, reset, &mut self.encoder)?;
            }
            Mode::Decode => {
                g726::decode(input, output, law, rate, reset, &mut self.decoder)?;
            }
            Mode::Both => {
                let intermediate = &mut self.intermediate[..n];
                g726::encode(input, intermediate, law, rate, reset, &mut self.encoder)?;
                g726::decode(intermediate, output, law, rate, reset, &mut self.decoder)?;
            }
        }

        if self.plan.expand_output() {
            g711::expand_in_place(law, output);
        }

        self.frames += 1;
        Ok(&self.output[..n])
    }
}
