//! Renderer-facing state types.
//!
//! The render collaborator consumes these value snapshots every tick; they
//! carry no references back into the simulation, avoiding aliasing between
//! render-state and logic-state.

use glam::Vec3;

use crate::spheres::SphereId;

/// One live (non-popping) sphere as the renderer should draw it.
#[derive(Clone, Debug)]
pub struct SphereSnapshot {
    pub id: SphereId,
    pub position: Vec3,
    /// Current scale; during the spawn animation this is below the radius.
    pub scale: f32,
    pub color_rgb: [f32; 3],
}

/// One burst particle as the renderer should draw it.
#[derive(Clone, Debug)]
pub struct BurstParticleSnapshot {
    pub position: Vec3,
    pub scale: f32,
    pub color_rgb: [f32; 3],
}

/// Pure display state for the scene backdrop. Has no coupling to the
/// audio/physics core; a denied camera permission degrades to `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundMode {
    #[default]
    Default,
    Camera,
    Beautiful,
}

impl BackgroundMode {
    pub fn from_name(name: &str) -> Option<BackgroundMode> {
        match name {
            "default" => Some(BackgroundMode::Default),
            "camera" => Some(BackgroundMode::Camera),
            "beautiful" => Some(BackgroundMode::Beautiful),
            _ => None,
        }
    }

    /// Safe fallback when the mode's external resource is unavailable.
    pub fn degraded(self) -> BackgroundMode {
        BackgroundMode::Default
    }
}
