//! Sphere population: spawning, floating, gestures, popping and respawn.
//!
//! The `Population` is the only mutator of the live-sphere collection. Pops
//! are one-shot transitions: a popping sphere stops moving, leaves proximity
//! candidacy, and is replaced by exactly one fresh sphere once its burst
//! completes, so the population size never drifts.

use std::fmt;

use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::audio::{AudioSink, SustainHandle};
use crate::burst::Burst;
use crate::constants::{
    CONTAINED_HEIGHT, CONTAINED_SPAWN_RADIUS, OPEN_HEIGHT, OPEN_SPAWN_RADIUS, PALETTE, RADIUS_MIN,
    RADIUS_SPAN, SPAWN_GROWTH_RATE, VELOCITY_RANGE, WALL_BOUND,
};
use crate::notes::{self, NoteMapping, Pitch};
use crate::state::{BurstParticleSnapshot, SphereSnapshot};

/// Unique sphere identity, allocated monotonically and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SphereId(pub u32);

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Categorical sphere color; also the note key in the color-keyed mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SphereColor {
    Rose,
    Sky,
    Mint,
    Lemon,
    Lavender,
    Apricot,
}

impl SphereColor {
    pub const ALL: [SphereColor; 6] = [
        SphereColor::Rose,
        SphereColor::Sky,
        SphereColor::Mint,
        SphereColor::Lemon,
        SphereColor::Lavender,
        SphereColor::Apricot,
    ];

    pub fn rgb(self) -> [f32; 3] {
        PALETTE[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            SphereColor::Rose => "rose",
            SphereColor::Sky => "sky",
            SphereColor::Mint => "mint",
            SphereColor::Lemon => "lemon",
            SphereColor::Lavender => "lavender",
            SphereColor::Apricot => "apricot",
        }
    }

    /// Parse a color token (name or the original hex form). Returns None for
    /// unknown tokens; note mapping falls back to the root pitch in that case.
    pub fn from_name(token: &str) -> Option<SphereColor> {
        match token.to_ascii_lowercase().as_str() {
            "rose" | "#ffb7b2" => Some(SphereColor::Rose),
            "sky" | "#aec6cf" => Some(SphereColor::Sky),
            "mint" | "#77dd77" => Some(SphereColor::Mint),
            "lemon" | "#fdfd96" => Some(SphereColor::Lemon),
            "lavender" | "#c3b1e1" => Some(SphereColor::Lavender),
            "apricot" | "#ffb347" => Some(SphereColor::Apricot),
            _ => None,
        }
    }
}

/// Per-sphere lifecycle. A held sustain is an attribute of a floating sphere
/// (`Sphere::active_note`), not a phase of its own.
#[derive(Clone, Debug)]
pub enum Phase {
    /// Scale grows linearly from 0 toward the target radius.
    Spawning { scale: f32 },
    Floating,
    /// Movement has ceased; the burst plays out at the last known position.
    Popping { burst: Burst },
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub id: SphereId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub color: SphereColor,
    pub phase: Phase,
    /// Most recent auto-pop trigger time; repeated triggers stay observable
    /// as distinct values.
    pub auto_pop_at: Option<f64>,
    active_note: Option<SustainHandle>,
}

impl Sphere {
    pub fn is_popping(&self) -> bool {
        matches!(self.phase, Phase::Popping { .. })
    }

    /// Render scale: the spawn animation interpolates from 0 to the radius.
    pub fn current_scale(&self) -> f32 {
        match self.phase {
            Phase::Spawning { scale } => scale,
            _ => self.radius,
        }
    }
}

/// Spatial spawn profile. `Contained` keeps spheres within arm's reach around
/// the reference point at eye level; `Open` fills the whole bounding cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnProfile {
    Contained,
    Open,
}

pub struct Population {
    spheres: Vec<Sphere>,
    next_id: u32,
    profile: SpawnProfile,
    mapping: NoteMapping,
    rng: StdRng,
}

impl Population {
    pub fn new(count: usize, profile: SpawnProfile, mapping: NoteMapping, seed: u64) -> Self {
        let mut pop = Self {
            spheres: Vec::with_capacity(count),
            next_id: 0,
            profile,
            mapping,
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..count {
            let id = pop.alloc_id();
            let sphere = pop.generate(id);
            pop.spheres.push(sphere);
        }
        pop
    }

    fn alloc_id(&mut self) -> SphereId {
        let id = SphereId(self.next_id);
        self.next_id += 1;
        id
    }

    fn generate(&mut self, id: SphereId) -> Sphere {
        let (spawn_radius, height) = match self.profile {
            SpawnProfile::Contained => (CONTAINED_SPAWN_RADIUS, CONTAINED_HEIGHT),
            SpawnProfile::Open => (OPEN_SPAWN_RADIUS, OPEN_HEIGHT),
        };
        let rng = &mut self.rng;
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * spawn_radius * 2.0,
            height.0 + rng.gen::<f32>() * (height.1 - height.0),
            (rng.gen::<f32>() - 0.5) * spawn_radius * 2.0,
        );
        let velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * VELOCITY_RANGE,
            (rng.gen::<f32>() - 0.5) * 2.0 * VELOCITY_RANGE,
            (rng.gen::<f32>() - 0.5) * 2.0 * VELOCITY_RANGE,
        );
        Sphere {
            id,
            position,
            velocity,
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            color: SphereColor::ALL[rng.gen_range(0..SphereColor::ALL.len())],
            phase: Phase::Spawning { scale: 0.0 },
            auto_pop_at: None,
            active_note: None,
        }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn profile(&self) -> SpawnProfile {
        self.profile
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.iter()
    }

    pub fn get(&self, id: SphereId) -> Option<&Sphere> {
        self.spheres.iter().find(|s| s.id == id)
    }

    /// Move a sphere explicitly (drag/parallax style adjustments).
    pub fn set_position(&mut self, id: SphereId, position: Vec3) {
        if let Some(s) = self.spheres.iter_mut().find(|s| s.id == id) {
            s.position = position;
        }
    }

    pub fn set_velocity(&mut self, id: SphereId, velocity: Vec3) {
        if let Some(s) = self.spheres.iter_mut().find(|s| s.id == id) {
            s.velocity = velocity;
        }
    }

    /// Advance the simulation by `dt` seconds: grow spawning spheres,
    /// integrate motion with per-axis wall reflection, play out bursts, and
    /// replace each completed pop with one fresh sphere.
    pub fn tick(&mut self, dt: f32) {
        let mut finished: SmallVec<[usize; 4]> = SmallVec::new();
        for (i, sphere) in self.spheres.iter_mut().enumerate() {
            match &mut sphere.phase {
                Phase::Popping { burst } => {
                    if burst.tick(dt) {
                        finished.push(i);
                    }
                    continue;
                }
                Phase::Spawning { scale } => {
                    *scale = (*scale + dt * SPAWN_GROWTH_RATE).min(sphere.radius);
                    if *scale >= sphere.radius {
                        sphere.phase = Phase::Floating;
                    }
                }
                Phase::Floating => {}
            }
            sphere.position += sphere.velocity * dt;
            // Per-axis scalar reflection; overshoot past the bound is left
            // uncorrected for one tick.
            if sphere.position.x.abs() > WALL_BOUND {
                sphere.velocity.x = -sphere.velocity.x;
            }
            if sphere.position.y.abs() > WALL_BOUND {
                sphere.velocity.y = -sphere.velocity.y;
            }
            if sphere.position.z.abs() > WALL_BOUND {
                sphere.velocity.z = -sphere.velocity.z;
            }
        }
        // One removed, one spawned: the population size is invariant.
        for &i in finished.iter().rev() {
            let old = self.spheres.remove(i);
            let id = self.alloc_id();
            let fresh = self.generate(id);
            self.spheres.push(fresh);
            log::debug!("sphere {} burst complete, spawned {}", old.id, id);
        }
    }

    /// Begin a sustained note on `id`. Ignored while popping or already held.
    pub fn press(&mut self, id: SphereId, sink: &mut dyn AudioSink) -> Option<Pitch> {
        let mapping = self.mapping;
        let sphere = self.spheres.iter_mut().find(|s| s.id == id)?;
        if sphere.is_popping() || sphere.active_note.is_some() {
            return None;
        }
        let pitch = match mapping {
            NoteMapping::Continuous => {
                notes::continuous_pitch(sphere.radius, sphere.velocity.length())
            }
            NoteMapping::ColorKeyed => notes::color_pitch(sphere.color),
        };
        sphere.active_note = Some(sink.begin_sustain(pitch));
        Some(pitch)
    }

    /// End the sustained note on `id`. Releasing with nothing held is a no-op.
    pub fn release(&mut self, id: SphereId, sink: &mut dyn AudioSink) {
        if let Some(sphere) = self.spheres.iter_mut().find(|s| s.id == id) {
            if let Some(handle) = sphere.active_note.take() {
                sink.end_sustain(handle);
            }
        }
    }

    /// Transition `id` to popping, releasing any held sustain so its voice
    /// does not outlive the sphere. Returns false if the sphere is unknown or
    /// already popping (the transition is one-shot).
    pub fn pop(&mut self, id: SphereId, sink: &mut dyn AudioSink) -> bool {
        let Some(index) = self.spheres.iter().position(|s| s.id == id) else {
            return false;
        };
        if self.spheres[index].is_popping() {
            return false;
        }
        if let Some(handle) = self.spheres[index].active_note.take() {
            sink.end_sustain(handle);
        }
        let origin = self.spheres[index].position;
        let burst = Burst::new(origin, &mut self.rng);
        self.spheres[index].phase = Phase::Popping { burst };
        true
    }

    /// Proximity selector: pop the non-popping sphere closest to the origin,
    /// stamping it with the trigger time. Ties keep the first in iteration
    /// order; an empty candidate set is a silent no-op. A held sustain on the
    /// winner is released.
    pub fn auto_pop_closest(&mut self, now_sec: f64, sink: &mut dyn AudioSink) -> Option<SphereId> {
        let mut best: Option<(usize, f32)> = None;
        for (i, sphere) in self.spheres.iter().enumerate() {
            if sphere.is_popping() {
                continue;
            }
            let dist = sphere.position.length();
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        let (index, _) = best?;
        let id = self.spheres[index].id;
        if let Some(handle) = self.spheres[index].active_note.take() {
            sink.end_sustain(handle);
        }
        self.spheres[index].auto_pop_at = Some(now_sec);
        let origin = self.spheres[index].position;
        let burst = Burst::new(origin, &mut self.rng);
        self.spheres[index].phase = Phase::Popping { burst };
        Some(id)
    }

    /// Regenerate every sphere in place under `profile` (immersive mode
    /// enter/exit): same ids, same count, fresh randomized attributes. Held
    /// sustains are released before their spheres are replaced.
    pub fn regenerate(&mut self, profile: SpawnProfile, sink: &mut dyn AudioSink) {
        self.profile = profile;
        for i in 0..self.spheres.len() {
            if let Some(handle) = self.spheres[i].active_note.take() {
                sink.end_sustain(handle);
            }
            let id = self.spheres[i].id;
            let fresh = self.generate(id);
            self.spheres[i] = fresh;
        }
        log::info!(
            "regenerated {} spheres under {:?} profile",
            self.spheres.len(),
            profile
        );
    }

    /// Rebuild renderer-facing snapshots for the current tick.
    pub fn snapshot(
        &self,
        spheres_out: &mut Vec<SphereSnapshot>,
        particles_out: &mut Vec<BurstParticleSnapshot>,
    ) {
        spheres_out.clear();
        particles_out.clear();
        for sphere in &self.spheres {
            match &sphere.phase {
                Phase::Popping { burst } => {
                    for p in burst.particles() {
                        if p.life > 0.0 {
                            particles_out.push(BurstParticleSnapshot {
                                position: p.position,
                                scale: p.current_scale(),
                                color_rgb: sphere.color.rgb(),
                            });
                        }
                    }
                }
                _ => spheres_out.push(SphereSnapshot {
                    id: sphere.id,
                    position: sphere.position,
                    scale: sphere.current_scale(),
                    color_rgb: sphere.color.rgb(),
                }),
            }
        }
    }
}
