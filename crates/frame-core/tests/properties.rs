//! Property tests for windowing, classification and sessions

mod common;

use common::{from_bytes, to_bytes};
use frame_core::{
    FormatPlan, FrameWindow, Law, Mode, SampleRepresentation, Session, SessionConfig,
};
use proptest::prelude::*;
use std::io::Cursor;

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Encode), Just(Mode::Decode), Just(Mode::Both)]
}

fn any_law() -> impl Strategy<Value = Law> {
    prop_oneof![Just(Law::A), Just(Law::Mu), Just(Law::Linear)]
}

proptest! {
    #[test]
    fn prop_whole_file_count_rounds_up(size in 0u64..200_000, frame in 1usize..2048) {
        let window = FrameWindow::compute(1, frame, 0, size);
        let frame_bytes = 2 * frame as u64;
        prop_assert_eq!(window.start_offset, 0);
        prop_assert_eq!(window.frame_count, (size + frame_bytes - 1) / frame_bytes);
    }

    #[test]
    fn prop_window_covers_remaining_bytes(
        size in 0u64..100_000,
        frame in 1usize..512,
        first in 1u64..64,
    ) {
        let window = FrameWindow::compute(first, frame, 0, size);
        let frame_bytes = 2 * frame as u64;
        prop_assert_eq!(window.start_offset, 2 * (first - 1) * frame as u64);

        let remaining = size.saturating_sub(window.start_offset);
        prop_assert!(window.frame_count * frame_bytes >= remaining);
        if window.frame_count > 0 {
            prop_assert!((window.frame_count - 1) * frame_bytes < remaining);
        }
    }

    #[test]
    fn prop_classifier_routes_codec_samples(mode in any_mode(), law in any_law()) {
        let plan = FormatPlan::classify(mode, law);

        prop_assert_eq!(plan.input == SampleRepresentation::Adpcm, mode == Mode::Decode);
        prop_assert_eq!(plan.output == SampleRepresentation::Adpcm, mode == Mode::Encode);
        prop_assert_eq!(plan.compress_input(), law == Law::Linear && mode != Mode::Decode);
        prop_assert_eq!(plan.expand_output(), law == Law::Linear && mode != Mode::Encode);
        prop_assert_eq!(plan.codec_law, law.codec_law());
    }

    #[test]
    fn prop_output_length_matches_window(
        samples in 0usize..600,
        frame in 1usize..100,
        header in 0usize..30,
        mode in any_mode(),
        law in any_law(),
    ) {
        let words: Vec<i16> = (0..header + samples).map(|i| (i % 16) as i16).collect();
        let config = SessionConfig::builder()
            .mode(mode)
            .law(law)
            .frame_size(frame)
            .header_samples(header)
            .build()
            .unwrap();

        let mut sink = Vec::new();
        let report = Session::new(config).run(Cursor::new(to_bytes(&words)), &mut sink).unwrap();

        prop_assert_eq!(report.samples as usize, samples);
        prop_assert_eq!(from_bytes(&sink).len(), header + samples);
        prop_assert_eq!(&sink[..2 * header], &to_bytes(&words[..header])[..]);
    }
}
