//! Embedded melody presets and their event types.
//!
//! A melody is an ordered sequence of events; the order carries no timing
//! meaning, only `start_sec` does. Playback runs on a fixed 120 BPM grid, so
//! a quarter note lasts half a second.

use crate::notes::{Pitch, A4, C4, D4, E4, F4, G3, G4};

/// Symbolic note length on the fixed playback grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteLength {
    Half,
    Quarter,
    Eighth,
}

impl NoteLength {
    pub fn seconds(self) -> f64 {
        match self {
            NoteLength::Half => 1.0,
            NoteLength::Quarter => 0.5,
            NoteLength::Eighth => 0.25,
        }
    }
}

/// One scheduled note of a melody. Immutable preset data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MelodyEvent {
    pub pitch: Pitch,
    pub length: NoteLength,
    pub start_sec: f64,
}

const fn ev(pitch: Pitch, length: NoteLength, start_sec: f64) -> MelodyEvent {
    MelodyEvent {
        pitch,
        length,
        start_sec,
    }
}

use NoteLength::{Eighth, Half, Quarter};

/// Twinkle Twinkle Little Star.
pub const TWINKLE: &[MelodyEvent] = &[
    // Part 1
    ev(C4, Quarter, 0.0),
    ev(C4, Quarter, 0.5),
    ev(G4, Quarter, 1.0),
    ev(G4, Quarter, 1.5),
    ev(A4, Quarter, 2.0),
    ev(A4, Quarter, 2.5),
    ev(G4, Half, 3.0),
    ev(F4, Quarter, 4.0),
    ev(F4, Quarter, 4.5),
    ev(E4, Quarter, 5.0),
    ev(E4, Quarter, 5.5),
    ev(D4, Quarter, 6.0),
    ev(D4, Quarter, 6.5),
    ev(C4, Half, 7.0),
    // Part 2
    ev(G4, Quarter, 8.0),
    ev(G4, Quarter, 8.5),
    ev(F4, Quarter, 9.0),
    ev(F4, Quarter, 9.5),
    ev(E4, Quarter, 10.0),
    ev(E4, Quarter, 10.5),
    ev(D4, Half, 11.0),
    // Part 3
    ev(G4, Quarter, 12.0),
    ev(G4, Quarter, 12.5),
    ev(F4, Quarter, 13.0),
    ev(F4, Quarter, 13.5),
    ev(E4, Quarter, 14.0),
    ev(E4, Quarter, 14.5),
    ev(D4, Half, 15.0),
    // Part 4 (repeat of part 1)
    ev(C4, Quarter, 16.0),
    ev(C4, Quarter, 16.5),
    ev(G4, Quarter, 17.0),
    ev(G4, Quarter, 17.5),
    ev(A4, Quarter, 18.0),
    ev(A4, Quarter, 18.5),
    ev(G4, Half, 19.0),
    ev(F4, Quarter, 20.0),
    ev(F4, Quarter, 20.5),
    ev(E4, Quarter, 21.0),
    ev(E4, Quarter, 21.5),
    ev(D4, Quarter, 22.0),
    ev(D4, Quarter, 22.5),
    ev(C4, Half, 23.0),
];

/// Ode to Joy.
pub const ODE: &[MelodyEvent] = &[
    // Part 1
    ev(E4, Quarter, 0.0),
    ev(E4, Quarter, 0.5),
    ev(F4, Quarter, 1.0),
    ev(G4, Quarter, 1.5),
    ev(G4, Quarter, 2.0),
    ev(F4, Quarter, 2.5),
    ev(E4, Quarter, 3.0),
    ev(D4, Quarter, 3.5),
    ev(C4, Quarter, 4.0),
    ev(C4, Quarter, 4.5),
    ev(D4, Quarter, 5.0),
    ev(E4, Quarter, 5.5),
    ev(E4, Quarter, 6.0),
    ev(D4, Eighth, 6.5),
    ev(D4, Half, 6.75),
    // Part 2
    ev(E4, Quarter, 8.0),
    ev(E4, Quarter, 8.5),
    ev(F4, Quarter, 9.0),
    ev(G4, Quarter, 9.5),
    ev(G4, Quarter, 10.0),
    ev(F4, Quarter, 10.5),
    ev(E4, Quarter, 11.0),
    ev(D4, Quarter, 11.5),
    ev(C4, Quarter, 12.0),
    ev(C4, Quarter, 12.5),
    ev(D4, Quarter, 13.0),
    ev(E4, Quarter, 13.5),
    ev(D4, Quarter, 14.0),
    ev(C4, Eighth, 14.5),
    ev(C4, Half, 14.75),
    // Part 3
    ev(D4, Quarter, 16.0),
    ev(D4, Quarter, 16.5),
    ev(E4, Quarter, 17.0),
    ev(C4, Quarter, 17.5),
    ev(D4, Quarter, 18.0),
    ev(E4, Eighth, 18.5),
    ev(F4, Eighth, 18.75),
    ev(E4, Quarter, 19.0),
    ev(C4, Quarter, 19.5),
    ev(D4, Quarter, 20.0),
    ev(E4, Eighth, 20.5),
    ev(F4, Eighth, 20.75),
    ev(E4, Quarter, 21.0),
    ev(D4, Quarter, 21.5),
    ev(C4, Quarter, 22.0),
    ev(D4, Quarter, 22.5),
    ev(G3, Half, 23.0),
    // Part 4 (repeat of part 2)
    ev(E4, Quarter, 24.0),
    ev(E4, Quarter, 24.5),
    ev(F4, Quarter, 25.0),
    ev(G4, Quarter, 25.5),
    ev(G4, Quarter, 26.0),
    ev(F4, Quarter, 26.5),
    ev(E4, Quarter, 27.0),
    ev(D4, Quarter, 27.5),
    ev(C4, Quarter, 28.0),
    ev(C4, Quarter, 28.5),
    ev(D4, Quarter, 29.0),
    ev(E4, Quarter, 29.5),
    ev(D4, Quarter, 30.0),
    ev(C4, Eighth, 30.5),
    ev(C4, Half, 30.75),
];

/// Built-in song selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Song {
    Twinkle,
    Ode,
}

impl Song {
    pub fn events(self) -> &'static [MelodyEvent] {
        match self {
            Song::Twinkle => TWINKLE,
            Song::Ode => ODE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Song::Twinkle => "twinkle",
            Song::Ode => "ode",
        }
    }

    pub fn from_name(name: &str) -> Option<Song> {
        match name {
            "twinkle" => Some(Song::Twinkle),
            "ode" => Some(Song::Ode),
            _ => None,
        }
    }
}
