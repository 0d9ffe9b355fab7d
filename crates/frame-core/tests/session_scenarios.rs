//! Whole-session behaviour over in-memory streams

mod common;

use codec_core::codecs::{g711, g726};
use codec_core::{BitRate, CompandingLaw, G726State};
use common::{from_bytes, sine, to_bytes, to_log, wav_like_header};
use frame_core::{Law, Mode, RateSchedule, Session, SessionConfig};
use std::io::Cursor;

fn run(config: SessionConfig, source: Vec<u8>) -> (frame_core::SessionReport, Vec<u8>) {
    let mut sink = Vec::new();
    let report = Session::new(config)
        .run(Cursor::new(source), &mut sink)
        .expect("session should succeed");
    (report, sink)
}

#[test]
fn test_alaw_tandem_ten_frames_with_header() {
    let header = wav_like_header();
    let payload = to_log(CompandingLaw::ALaw, &sine(320, 440.0, 8000.0));
    let mut source = header.clone();
    source.extend_from_slice(&payload);

    let config = SessionConfig::builder()
        .law(Law::A)
        .mode(Mode::Both)
        .rate(BitRate::Kbps32)
        .frame_size(32)
        .first_frame(1)
        .frame_count(0)
        .build()
        .unwrap();
    let (report, sink) = run(config, to_bytes(&source));

    assert_eq!(report.frames, 10);
    assert_eq!(report.samples, 320);
    assert_eq!(report.header_samples, 22);
    assert!(!report.stopped_early);

    let out = from_bytes(&sink);
    assert_eq!(out.len(), 22 + 320);
    assert_eq!(&out[..22], &header[..]);

    // frame-by-frame reference with the reset on frame 0 only
    let mut encoder = G726State::new();
    let mut decoder = G726State::new();
    let mut expected = Vec::new();
    for (k, frame) in payload.chunks(32).enumerate() {
        let mut codes = vec![0; frame.len()];
        let mut decoded = vec![0; frame.len()];
        g726::encode(frame, &mut codes, CompandingLaw::ALaw, BitRate::Kbps32, k == 0, &mut encoder).unwrap();
        g726::decode(&codes, &mut decoded, CompandingLaw::ALaw, BitRate::Kbps32, k == 0, &mut decoder).unwrap();
        expected.extend(decoded);
    }
    assert_eq!(&out[22..], &expected[..]);
}

#[test]
fn test_linear_encode_produces_one_code_per_sample() {
    let linear = sine(500, 1000.0, 12000.0);
    let config = SessionConfig::builder()
        .law(Law::Linear)
        .mode(Mode::Encode)
        .header_samples(0)
        .build()
        .unwrap();
    let (report, sink) = run(config, to_bytes(&linear));

    let codes = from_bytes(&sink);
    assert_eq!(codes.len(), 500);
    assert_eq!(report.samples, 500);
    assert!(codes.iter().all(|&c| (0..16).contains(&c)));

    // same codes as encoding the A-law version directly
    let log = to_log(CompandingLaw::ALaw, &linear);
    let config = SessionConfig::builder()
        .law(Law::A)
        .mode(Mode::Encode)
        .header_samples(0)
        .build()
        .unwrap();
    let (_, from_log) = run(config, to_bytes(&log));
    assert_eq!(sink, from_log);
}

#[test]
fn test_offset_past_end_writes_header_only() {
    let mut source = wav_like_header();
    source.extend(to_log(CompandingLaw::MuLaw, &sine(64, 300.0, 4000.0)));

    let config = SessionConfig::builder()
        .law(Law::Mu)
        .frame_size(32)
        .first_frame(50)
        .build()
        .unwrap();
    let (report, sink) = run(config, to_bytes(&source));

    assert_eq!(report.frames, 0);
    assert!(report.window.is_empty());
    assert_eq!(from_bytes(&sink), wav_like_header());
}

#[test]
fn test_partial_final_frame() {
    let payload = to_log(CompandingLaw::ALaw, &sine(70, 700.0, 5000.0));
    let config = SessionConfig::builder()
        .mode(Mode::Encode)
        .frame_size(32)
        .header_samples(0)
        .build()
        .unwrap();
    let (report, sink) = run(config, to_bytes(&payload));

    assert_eq!(report.window.frame_count, 3);
    assert_eq!(report.frames, 3);
    assert_eq!(report.samples, 70);
    assert_eq!(from_bytes(&sink).len(), 70);
}

#[test]
fn test_window_selects_middle_frames() {
    let payload = to_log(CompandingLaw::ALaw, &sine(256, 500.0, 6000.0));
    let config = SessionConfig::builder()
        .mode(Mode::Encode)
        .frame_size(32)
        .first_frame(3)
        .frame_count(2)
        .header_samples(0)
        .build()
        .unwrap();
    let (report, sink) = run(config, to_bytes(&payload));

    assert_eq!(report.window.start_offset, 128);
    assert_eq!(report.frames, 2);

    // the window starts from a reset state at frame 3
    let mut state = G726State::new();
    let mut expected = vec![0; 64];
    g726::encode(&payload[64..128], &mut expected, CompandingLaw::ALaw, BitRate::Kbps32, true, &mut state)
        .unwrap();
    assert_eq!(from_bytes(&sink), expected);
}

#[test]
fn test_linear_tandem_stays_close_to_input() {
    let linear = sine(1600, 440.0, 8000.0);
    let config = SessionConfig::builder()
        .law(Law::Linear)
        .mode(Mode::Both)
        .rate(BitRate::Kbps40)
        .header_samples(0)
        .build()
        .unwrap();
    let (_, sink) = run(config, to_bytes(&linear));
    let decoded = from_bytes(&sink);
    assert_eq!(decoded.len(), linear.len());

    // skip adaptation, then compare energy of the error to the signal
    let (signal, noise) = linear[400..]
        .iter()
        .zip(&decoded[400..])
        .fold((0.0f64, 0.0f64), |(s, n), (&x, &y)| {
            let e = f64::from(x) - f64::from(y);
            (s + f64::from(x).powi(2), n + e * e)
        });
    let snr = 10.0 * (signal / noise.max(1.0)).log10();
    assert!(snr > 15.0, "SNR {snr:.1} dB");
}

#[test]
fn test_decode_only_linear_output() {
    let codes: Vec<i16> = (0..96).map(|i| (i * 7 % 16) as i16).collect();
    let config = SessionConfig::builder()
        .law(Law::Linear)
        .mode(Mode::Decode)
        .header_samples(0)
        .build()
        .unwrap();
    let (_, sink) = run(config, to_bytes(&codes));

    // every output sample is an A-law reconstruction level
    for sample in from_bytes(&sink) {
        let code = g711::compress_sample(CompandingLaw::ALaw, sample);
        assert_eq!(g711::expand_sample(CompandingLaw::ALaw, code), sample);
    }
}

#[test]
fn test_rate_schedule_matches_manual_calls() {
    let payload = to_log(CompandingLaw::MuLaw, &sine(128, 440.0, 7000.0));
    let schedule = RateSchedule::parse("32-24");
    let config = SessionConfig::builder()
        .law(Law::Mu)
        .mode(Mode::Encode)
        .rates(schedule)
        .frame_size(32)
        .header_samples(0)
        .build()
        .unwrap();
    let (_, sink) = run(config, to_bytes(&payload));

    let rates = [BitRate::Kbps32, BitRate::Kbps24];
    let mut state = G726State::new();
    let mut expected = Vec::new();
    for (k, frame) in payload.chunks(32).enumerate() {
        let mut codes = vec![0; 32];
        g726::encode(frame, &mut codes, CompandingLaw::MuLaw, rates[k % 2], k == 0, &mut state).unwrap();
        expected.extend(codes);
    }
    assert_eq!(from_bytes(&sink), expected);
}

#[test]
fn test_noreset_matches_reset_from_fresh_state() {
    let payload = to_log(CompandingLaw::ALaw, &sine(96, 440.0, 8000.0));
    let build = |reset| {
        SessionConfig::builder()
            .reset(reset)
            .header_samples(0)
            .build()
            .unwrap()
    };

    let (_, with_reset) = run(build(true), to_bytes(&payload));
    let (_, without_reset) = run(build(false), to_bytes(&payload));
    assert_eq!(with_reset, without_reset);
}
