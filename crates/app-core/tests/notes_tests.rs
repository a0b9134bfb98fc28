// Host-side tests for pitch types and the stimulus-to-note mappers.

use app_core::notes::{
    color_pitch, continuous_pitch, midi_to_hz, pitch_for_color_name, Pitch, A4, C4, C5, D4, E4,
    E6, G4, PITCH_SCALE,
};
use app_core::spheres::SphereColor;

#[test]
fn midi_to_hz_matches_a4_and_octave() {
    let a4 = midi_to_hz(69.0);
    assert!((a4 - 440.0).abs() < 1e-4);
    let a5 = midi_to_hz(81.0);
    assert!((a5 - 880.0).abs() < 1e-3);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);
}

#[test]
fn pitch_frequency_is_monotonic_over_scale() {
    let mut prev = 0.0;
    for p in PITCH_SCALE {
        let f = p.frequency_hz();
        assert!(f > prev, "frequency not increasing at {p}");
        prev = f;
    }
}

#[test]
fn continuous_pitch_stays_within_scale() {
    // Property: no size/speed combination can leave the fixed scale.
    let mut size = -1.0_f32;
    while size < 2.0 {
        let mut speed = 0.0_f32;
        while speed < 25.0 {
            let pitch = continuous_pitch(size, speed);
            assert!(
                PITCH_SCALE.contains(&pitch),
                "pitch {pitch} for size {size} speed {speed} not in scale"
            );
            speed += 0.4;
        }
        size += 0.07;
    }
}

#[test]
fn continuous_pitch_clamps_at_both_ends() {
    assert_eq!(continuous_pitch(1.5, 0.0), C4, "largest size hits the root");
    assert_eq!(continuous_pitch(0.0, 30.0), E6, "tiny and fast hits the top");
    assert_eq!(continuous_pitch(5.0, 0.0), C4, "out-of-range size clamps low");
}

#[test]
fn continuous_pitch_non_increasing_in_size() {
    // Property: for a fixed speed, a larger sphere never sounds higher.
    for speed in [0.0_f32, 0.7, 2.3, 9.0] {
        let mut size = 0.0_f32;
        let mut prev = continuous_pitch(size, speed);
        while size < 1.6 {
            size += 0.05;
            let next = continuous_pitch(size, speed);
            assert!(
                next <= prev,
                "pitch rose from {prev} to {next} as size grew to {size}"
            );
            prev = next;
        }
    }
}

#[test]
fn continuous_pitch_non_decreasing_in_speed() {
    for size in [0.2_f32, 0.35, 0.5] {
        let mut prev = continuous_pitch(size, 0.0);
        for step in 1..20 {
            let next = continuous_pitch(size, step as f32 * 0.8);
            assert!(next >= prev, "pitch fell as speed grew");
            prev = next;
        }
    }
}

#[test]
fn color_pitch_round_trips_documented_table() {
    let expected = [
        (SphereColor::Rose, C4),
        (SphereColor::Sky, D4),
        (SphereColor::Mint, E4),
        (SphereColor::Lemon, G4),
        (SphereColor::Lavender, A4),
        (SphereColor::Apricot, C5),
    ];
    for (color, pitch) in expected {
        assert_eq!(color_pitch(color), pitch, "wrong pitch for {color:?}");
        assert_eq!(
            pitch_for_color_name(color.name()),
            pitch,
            "name lookup disagrees for {color:?}"
        );
    }
}

#[test]
fn color_tokens_accept_hex_form() {
    assert_eq!(pitch_for_color_name("#FFB7B2"), C4);
    assert_eq!(pitch_for_color_name("#aec6cf"), D4);
}

#[test]
fn unknown_color_token_falls_back_to_root() {
    assert_eq!(pitch_for_color_name("chartreuse"), C4);
    assert_eq!(pitch_for_color_name(""), C4);
}

#[test]
fn pitch_names_round_trip() {
    for p in PITCH_SCALE {
        let name = p.to_string();
        assert_eq!(Pitch::from_name(&name), Some(p), "round trip failed for {name}");
    }
    assert_eq!(Pitch::from_name("C4"), Some(Pitch::from_midi(60)));
    assert_eq!(Pitch::from_name("F#3"), Some(Pitch::from_midi(54)));
    assert_eq!(Pitch::from_name("Eb5"), Some(Pitch::from_midi(75)));
    assert_eq!(Pitch::from_name("A-1"), Some(Pitch::from_midi(9)));
    assert_eq!(Pitch::from_name("H4"), None);
    assert_eq!(Pitch::from_name("C"), None);
}
