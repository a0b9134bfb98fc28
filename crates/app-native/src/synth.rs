//! Native audio output: a small envelope-shaped sine mixer over cpal that
//! implements the core's `AudioSink`, with the mixed output tee'd into the
//! recording session.

use std::sync::{Arc, Mutex};

use app_core::{AudioSink, Pitch, RecordingSession, SustainHandle};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

const ATTACK_SEC: f32 = 0.01;
const RELEASE_SEC: f32 = 0.15;
const VOICE_AMPLITUDE: f32 = 0.3;

struct Voice {
    phase: f32,
    phase_inc: f32,
    amplitude: f32,
    emitted: u32,
    attack_samples: u32,
    release_samples: u32,
    /// One-shots enter release at this sample count; sustains wait for an
    /// explicit `end_sustain`.
    auto_release_at: Option<u32>,
    /// Samples left in the release tail once releasing.
    release_remaining: Option<u32>,
    handle: Option<u64>,
}

impl Voice {
    fn envelope(&self) -> f32 {
        if let Some(remaining) = self.release_remaining {
            remaining as f32 / self.release_samples.max(1) as f32
        } else if self.emitted < self.attack_samples {
            self.emitted as f32 / self.attack_samples.max(1) as f32
        } else {
            1.0
        }
    }

    /// Advance by one sample; returns false once the voice is finished.
    fn advance(&mut self) -> bool {
        self.phase += self.phase_inc;
        if self.phase > 2.0 * std::f32::consts::PI {
            self.phase -= 2.0 * std::f32::consts::PI;
        }
        self.emitted += 1;
        if self.release_remaining.is_none() {
            if let Some(at) = self.auto_release_at {
                if self.emitted >= at {
                    self.release_remaining = Some(self.release_samples);
                }
            }
        }
        match self.release_remaining {
            Some(0) => false,
            Some(remaining) => {
                self.release_remaining = Some(remaining - 1);
                true
            }
            None => true,
        }
    }
}

pub struct SynthState {
    sample_rate: f32,
    voices: Vec<Voice>,
    next_handle: u64,
    scratch: Vec<f32>,
    pub recorder: RecordingSession,
}

impl SynthState {
    fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
            next_handle: 0,
            scratch: Vec::new(),
            recorder: RecordingSession::new(sample_rate as u32),
        }
    }

    fn spawn_voice(&mut self, pitch: Pitch, auto_release_at: Option<u32>, handle: Option<u64>) {
        let sr = self.sample_rate;
        self.voices.push(Voice {
            phase: 0.0,
            phase_inc: 2.0 * std::f32::consts::PI * pitch.frequency_hz() / sr,
            amplitude: VOICE_AMPLITUDE,
            emitted: 0,
            attack_samples: (ATTACK_SEC * sr) as u32,
            release_samples: ((RELEASE_SEC * sr) as u32).max(1),
            auto_release_at,
            release_remaining: None,
            handle,
        });
    }
}

fn mix_sample(voices: &mut Vec<Voice>) -> f32 {
    let mut sum = 0.0f32;
    let mut i = 0usize;
    while i < voices.len() {
        let voice = &mut voices[i];
        sum += voice.phase.sin() * voice.amplitude * voice.envelope();
        if !voice.advance() {
            voices.swap_remove(i);
            continue;
        }
        i += 1;
    }
    // soft limit the mix
    sum.tanh()
}

/// `AudioSink` over the shared synth state. The transport only fires events
/// that are already due, so onsets are immediate.
pub struct CpalSink {
    state: Arc<Mutex<SynthState>>,
}

impl AudioSink for CpalSink {
    fn play_once(&mut self, pitch: Pitch, duration_sec: f64, _at_sec: f64) {
        let mut state = self.state.lock().unwrap();
        let total = (duration_sec as f32 * state.sample_rate) as u32;
        let attack = (ATTACK_SEC * state.sample_rate) as u32;
        state.spawn_voice(pitch, Some(total.max(attack)), None);
    }

    fn begin_sustain(&mut self, pitch: Pitch) -> SustainHandle {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let handle = state.next_handle;
        state.spawn_voice(pitch, None, Some(handle));
        SustainHandle(handle)
    }

    fn end_sustain(&mut self, handle: SustainHandle) {
        let mut state = self.state.lock().unwrap();
        for voice in &mut state.voices {
            if voice.handle == Some(handle.0) && voice.release_remaining.is_none() {
                voice.release_remaining = Some(voice.release_samples);
            }
        }
    }
}

/// Open the default output device and start the mixer. Returns None when no
/// usable device exists; the caller degrades to a silent sink.
pub fn start_output() -> Option<(CpalSink, cpal::Stream, Arc<Mutex<SynthState>>)> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = device.default_output_config().ok()?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    let state = Arc::new(Mutex::new(SynthState::new(sample_rate)));

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &config.into(), channels, Arc::clone(&state)).ok()?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &config.into(), channels, Arc::clone(&state)).ok()?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &config.into(), channels, Arc::clone(&state)).ok()?
        }
        _ => return None,
    };
    stream.play().ok()?;

    let sink = CpalSink {
        state: Arc::clone(&state),
    };
    Some((sink, stream, state))
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<SynthState>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let err_fn = |err| log::error!("audio stream error: {err}");
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let mut guard = state.lock().unwrap();
            let SynthState {
                voices,
                scratch,
                recorder,
                ..
            } = &mut *guard;
            scratch.clear();
            for frame in data.chunks_mut(channels) {
                let sample = mix_sample(voices);
                scratch.push(sample);
                for out in frame.iter_mut() {
                    *out = T::from_sample(sample);
                }
            }
            recorder.push(scratch);
        },
        err_fn,
        None,
    )
}
