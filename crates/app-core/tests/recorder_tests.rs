// Recording session: buffering, WAV finalization and the no-session error.

use std::io::Cursor;

use app_core::recorder::{RecorderError, RecordingSession};

#[test]
fn stop_without_start_is_an_error() {
    let mut session = RecordingSession::new(44_100);
    assert!(matches!(session.stop(), Err(RecorderError::NotRecording)));
}

#[test]
fn captured_chunks_finalize_into_a_valid_wav_blob() {
    let mut session = RecordingSession::new(48_000);
    session.start();
    assert!(session.is_active());
    session.push(&[0.0; 100]);
    session.push(&[0.5; 50]);

    let blob = session.stop().expect("finalize");
    assert!(!session.is_active());

    let reader = hound::WavReader::new(Cursor::new(blob)).expect("parse wav");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 48_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.len(), 150);

    let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
    assert!(samples[..100].iter().all(|&s| s == 0));
    let expected = (0.5 * i16::MAX as f32) as i16;
    assert!(samples[100..].iter().all(|&s| s == expected));
}

#[test]
fn out_of_range_samples_are_clamped() {
    let mut session = RecordingSession::new(44_100);
    session.start();
    session.push(&[2.0, -3.0]);

    let blob = session.stop().expect("finalize");
    let reader = hound::WavReader::new(Cursor::new(blob)).expect("parse wav");
    let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![i16::MAX, i16::MIN + 1]);
}

#[test]
fn restart_clears_the_previous_buffer() {
    let mut session = RecordingSession::new(44_100);
    session.start();
    session.push(&[0.1; 100]);

    // Starting while active implicitly restarts with an empty buffer.
    session.start();
    session.push(&[0.1; 10]);

    let blob = session.stop().expect("finalize");
    let reader = hound::WavReader::new(Cursor::new(blob)).expect("parse wav");
    assert_eq!(reader.len(), 10);
}

#[test]
fn pushes_while_inactive_are_ignored() {
    let mut session = RecordingSession::new(44_100);
    session.push(&[0.1; 40]);
    session.start();
    let blob = session.stop().expect("finalize");
    let reader = hound::WavReader::new(Cursor::new(blob)).expect("parse wav");
    assert_eq!(reader.len(), 0);
}

#[test]
fn a_second_stop_is_an_error_again() {
    let mut session = RecordingSession::new(44_100);
    session.start();
    session.stop().expect("first stop");
    assert!(matches!(session.stop(), Err(RecorderError::NotRecording)));
}
