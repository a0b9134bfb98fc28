//! Pitch representation and the stimulus-to-note mappers.
//!
//! Both mappers are pure and total: out-of-range inputs clamp to the ends of
//! the fixed scale and unrecognized color tokens fall back to the root note.

use std::fmt;

use crate::spheres::SphereColor;

/// A musical pitch as a MIDI note number (C4 = 60, A4 = 69).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(pub i32);

const SEMITONE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Pitch {
    pub const fn from_midi(midi: i32) -> Self {
        Pitch(midi)
    }

    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.0 as f32)
    }

    /// Parse a note name like `"C4"`, `"F#3"` or `"Eb5"`. Octaves may be
    /// negative (`"A-1"`).
    pub fn from_name(name: &str) -> Option<Pitch> {
        let mut chars = name.chars();
        let letter = chars.next()?;
        let base = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let octave: i32 = octave_str.parse().ok()?;
        Some(Pitch((octave + 1) * 12 + base + accidental))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let semitone = self.0.rem_euclid(12) as usize;
        let octave = self.0.div_euclid(12) - 1;
        write!(f, "{}{}", SEMITONE_NAMES[semitone], octave)
    }
}

pub const G3: Pitch = Pitch::from_midi(55);
pub const C4: Pitch = Pitch::from_midi(60);
pub const D4: Pitch = Pitch::from_midi(62);
pub const E4: Pitch = Pitch::from_midi(64);
pub const F4: Pitch = Pitch::from_midi(65);
pub const G4: Pitch = Pitch::from_midi(67);
pub const A4: Pitch = Pitch::from_midi(69);
pub const C5: Pitch = Pitch::from_midi(72);
pub const D5: Pitch = Pitch::from_midi(74);
pub const E5: Pitch = Pitch::from_midi(76);
pub const G5: Pitch = Pitch::from_midi(79);
pub const A5: Pitch = Pitch::from_midi(81);
pub const C6: Pitch = Pitch::from_midi(84);
pub const D6: Pitch = Pitch::from_midi(86);
pub const E6: Pitch = Pitch::from_midi(88);

/// Fixed ascending scale used by the continuous mapper, spanning two octaves.
pub const PITCH_SCALE: [Pitch; 13] = [C4, D4, E4, G4, A4, C5, D5, E5, G5, A5, C6, D6, E6];

/// Which stimulus drives note selection for sphere gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoteMapping {
    /// Sphere size and speed pick a step of [`PITCH_SCALE`].
    #[default]
    Continuous,
    /// Sphere color picks a fixed note of the major-scale subset.
    ColorKeyed,
}

/// Map sphere size and speed to a pitch. Smaller and faster both bias the
/// index upward; the index is clamped so this never leaves the scale.
pub fn continuous_pitch(size: f32, speed: f32) -> Pitch {
    let size_index = ((1.5 - size) * 10.0).floor() as i64;
    let speed_offset = speed.floor() as i64;
    let index = (size_index + speed_offset).clamp(0, PITCH_SCALE.len() as i64 - 1);
    PITCH_SCALE[index as usize]
}

/// Map a sphere color to its fixed pitch (6-note major-scale subset).
pub fn color_pitch(color: SphereColor) -> Pitch {
    match color {
        SphereColor::Rose => C4,
        SphereColor::Sky => D4,
        SphereColor::Mint => E4,
        SphereColor::Lemon => G4,
        SphereColor::Lavender => A4,
        SphereColor::Apricot => C5,
    }
}

/// Color-token lookup for external callers holding a string token.
/// Unrecognized tokens fall back to the root note.
pub fn pitch_for_color_name(token: &str) -> Pitch {
    match SphereColor::from_name(token) {
        Some(color) => color_pitch(color),
        None => C4,
    }
}

/// Convert a MIDI note number to Hertz (A4 = 440 Hz).
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
