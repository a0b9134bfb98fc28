//! Recording session: capture of the mixed audio output into a WAV blob.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("no active recording session")]
    NotRecording,
    #[error("wav finalize failed: {0}")]
    Encode(#[from] hound::Error),
}

/// Buffers mixed mono samples while active and finalizes them into a single
/// 16-bit PCM WAV blob on stop.
///
/// At most one session is active; `start` while active restarts (the buffer
/// is cleared either way). `stop` with no active session is an error, not a
/// silent no-op.
pub struct RecordingSession {
    chunks: Vec<Vec<f32>>,
    active: bool,
    sample_rate: u32,
}

impl RecordingSession {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            chunks: Vec::new(),
            active: false,
            sample_rate,
        }
    }

    /// Clear any previously buffered chunks and begin capturing.
    pub fn start(&mut self) {
        self.chunks.clear();
        self.active = true;
        log::info!("recording started at {} Hz", self.sample_rate);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Append a chunk of mixed output. Ignored while inactive.
    pub fn push(&mut self, samples: &[f32]) {
        if self.active {
            self.chunks.push(samples.to_vec());
        }
    }

    /// Finalize the buffered chunks into a WAV blob and deactivate.
    pub fn stop(&mut self) -> Result<Vec<u8>, RecorderError> {
        if !self.active {
            return Err(RecorderError::NotRecording);
        }
        self.active = false;

        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for chunk in self.chunks.drain(..) {
            for sample in chunk {
                let v = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                writer.write_sample(v)?;
            }
        }
        writer.finalize()?;
        Ok(cursor.into_inner())
    }
}
