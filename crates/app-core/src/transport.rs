//! Melody transport: a sorted-by-time event queue drained against a caller
//! supplied monotonic clock.
//!
//! `play` always cancels any pending schedule first, so at most one melody is
//! in flight and no stale events survive a stop or a song switch. Fired events
//! reach the audio sink and every subscriber with the same scheduled
//! timestamp, keeping sound and visuals aligned regardless of the order the
//! melody data was written in.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crossbeam_channel::{unbounded, Receiver, Sender};
use smallvec::SmallVec;

use crate::audio::AudioSink;
use crate::melody::MelodyEvent;
use crate::notes::Pitch;

/// Broadcast to subscribers for every fired melody note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteTrigger {
    pub pitch: Pitch,
    /// Scheduled fire time on the transport clock, not the tick that drained it.
    pub at_sec: f64,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    fire_at: f64,
    seq: u64,
    pitch: Pitch,
    duration_sec: f64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed so the BinaryHeap pops the earliest event; equal times keep
    // insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .fire_at
            .total_cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Transport {
    queue: BinaryHeap<Scheduled>,
    next_seq: u64,
    playing: bool,
    subscribers: SmallVec<[Sender<NoteTrigger>; 2]>,
}

impl Transport {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
            playing: false,
            subscribers: SmallVec::new(),
        }
    }

    /// Register a note-trigger listener. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<NoteTrigger> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Schedule every event of `melody` relative to `now_sec` and start
    /// playback. Any previously scheduled melody is cancelled first, so this
    /// never double-schedules. An empty melody is legal: it fires nothing and
    /// finishes immediately.
    pub fn play(&mut self, melody: &[MelodyEvent], now_sec: f64) {
        self.stop();
        for event in melody {
            self.queue.push(Scheduled {
                fire_at: now_sec + event.start_sec,
                seq: self.next_seq,
                pitch: event.pitch,
                duration_sec: event.length.seconds(),
            });
            self.next_seq += 1;
        }
        self.playing = !self.queue.is_empty();
        log::debug!("transport: scheduled {} events", self.queue.len());
    }

    /// Halt playback and discard all pending events. Notes already sounding
    /// are left to their release envelopes.
    pub fn stop(&mut self) {
        self.queue.clear();
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Fire every event due at `now_sec`: sound it through `sink` and
    /// broadcast a [`NoteTrigger`] stamped with the scheduled time.
    pub fn tick(&mut self, now_sec: f64, sink: &mut dyn AudioSink) {
        while let Some(next) = self.queue.peek() {
            if next.fire_at > now_sec {
                break;
            }
            let Some(event) = self.queue.pop() else {
                break;
            };
            sink.play_once(event.pitch, event.duration_sec, event.fire_at);
            let trigger = NoteTrigger {
                pitch: event.pitch,
                at_sec: event.fire_at,
            };
            self.subscribers.retain(|tx| tx.send(trigger).is_ok());
        }
        if self.playing && self.queue.is_empty() {
            self.playing = false;
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
