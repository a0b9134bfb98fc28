//! Interface to the audio collaborator.
//!
//! Synthesis lives outside the core (the native frontend implements this over
//! cpal). All calls are fire-and-forget and never fail; a sink that cannot
//! produce sound simply does nothing.

use crate::notes::Pitch;

/// Opaque token identifying a held note, minted by the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SustainHandle(pub u64);

pub trait AudioSink {
    /// Sound `pitch` for `duration_sec`, starting at `at_sec` on the shared clock.
    fn play_once(&mut self, pitch: Pitch, duration_sec: f64, at_sec: f64);

    /// Begin a held note; it sounds until [`AudioSink::end_sustain`] is called
    /// with the returned handle.
    fn begin_sustain(&mut self, pitch: Pitch) -> SustainHandle;

    /// Release a held note. Unknown handles are ignored.
    fn end_sustain(&mut self, handle: SustainHandle);
}

/// Sink that discards everything. Used when no audio device is available so
/// the simulation can still run.
#[derive(Debug, Default)]
pub struct NullSink {
    next_handle: u64,
}

impl AudioSink for NullSink {
    fn play_once(&mut self, _pitch: Pitch, _duration_sec: f64, _at_sec: f64) {}

    fn begin_sustain(&mut self, _pitch: Pitch) -> SustainHandle {
        self.next_handle += 1;
        SustainHandle(self.next_handle)
    }

    fn end_sustain(&mut self, _handle: SustainHandle) {}
}
