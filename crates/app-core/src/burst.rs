//! Short-lived particle burst marking a sphere's removal.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::{
    BURST_DECAY, BURST_PARTICLE_COUNT, BURST_PARTICLE_SPEED, BURST_SCALE_MIN, BURST_SCALE_SPAN,
};

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    velocity: Vec3,
    pub life: f32,
    pub scale: f32,
}

impl Particle {
    /// Render scale: the base scale shrinks with remaining life.
    pub fn current_scale(&self) -> f32 {
        self.scale * self.life.max(0.0)
    }
}

/// A one-shot particle system with a bounded lifetime; `tick` reports
/// completion once every particle has expired, so a popping sphere can never
/// stall.
#[derive(Clone, Debug)]
pub struct Burst {
    particles: Vec<Particle>,
}

impl Burst {
    pub fn new(origin: Vec3, rng: &mut StdRng) -> Self {
        let particles = (0..BURST_PARTICLE_COUNT)
            .map(|_| Particle {
                position: origin,
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * BURST_PARTICLE_SPEED,
                    (rng.gen::<f32>() - 0.5) * 2.0 * BURST_PARTICLE_SPEED,
                    (rng.gen::<f32>() - 0.5) * 2.0 * BURST_PARTICLE_SPEED,
                ),
                life: 1.0,
                scale: BURST_SCALE_MIN + rng.gen::<f32>() * BURST_SCALE_SPAN,
            })
            .collect();
        Self { particles }
    }

    /// Advance the burst by `dt` seconds. Returns true once complete.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut alive = 0usize;
        for p in &mut self.particles {
            if p.life > 0.0 {
                alive += 1;
                p.life -= dt * BURST_DECAY;
                p.position += p.velocity * dt;
            }
        }
        alive == 0
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
