// Preset melody data sanity checks.

use app_core::melody::{NoteLength, Song, ODE, TWINKLE};

#[test]
fn presets_are_nonempty_and_start_at_zero() {
    for song in [Song::Twinkle, Song::Ode] {
        let events = song.events();
        assert!(!events.is_empty(), "{} has no events", song.name());
        assert_eq!(events[0].start_sec, 0.0, "{} starts late", song.name());
        for ev in events {
            assert!(ev.start_sec >= 0.0, "negative start time in {}", song.name());
        }
    }
}

#[test]
fn preset_event_counts_match_source_data() {
    assert_eq!(TWINKLE.len(), 42);
    assert_eq!(ODE.len(), 62);
}

#[test]
fn preset_start_times_are_sorted() {
    // Not required by the transport, but true of the embedded data.
    for song in [Song::Twinkle, Song::Ode] {
        let events = song.events();
        for pair in events.windows(2) {
            assert!(
                pair[0].start_sec <= pair[1].start_sec,
                "{} preset out of order",
                song.name()
            );
        }
    }
}

#[test]
fn note_lengths_follow_the_120_bpm_grid() {
    assert_eq!(NoteLength::Quarter.seconds(), 0.5);
    assert_eq!(NoteLength::Half.seconds(), 1.0);
    assert_eq!(NoteLength::Eighth.seconds(), 0.25);
}

#[test]
fn song_names_round_trip() {
    for song in [Song::Twinkle, Song::Ode] {
        assert_eq!(Song::from_name(song.name()), Some(song));
    }
    assert_eq!(Song::from_name("fur-elise"), None);
}
