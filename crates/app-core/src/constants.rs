// Shared simulation tuning constants used by the core and the native frontend.

// Population
pub const INITIAL_SPHERES: usize = 10;

// Movement
pub const WALL_BOUND: f32 = 8.0; // per-axis reflection threshold
pub const VELOCITY_RANGE: f32 = 1.0; // per-axis velocity drawn from +/- this
pub const SPAWN_GROWTH_RATE: f32 = 2.0; // scale units per second while spawning

// Sizing
pub const RADIUS_MIN: f32 = 0.2;
pub const RADIUS_SPAN: f32 = 0.3;

// Spawn profiles
pub const CONTAINED_SPAWN_RADIUS: f32 = 1.5;
pub const CONTAINED_HEIGHT: (f32, f32) = (0.5, 1.5); // eye-level band
pub const OPEN_SPAWN_RADIUS: f32 = 10.0;
pub const OPEN_HEIGHT: (f32, f32) = (-10.0, 10.0);

// Burst particles
pub const BURST_PARTICLE_COUNT: usize = 20;
pub const BURST_PARTICLE_SPEED: f32 = 4.0; // per-axis velocity drawn from +/- this
pub const BURST_DECAY: f32 = 2.0; // life units per second
pub const BURST_SCALE_MIN: f32 = 0.1;
pub const BURST_SCALE_SPAN: f32 = 0.4;

// Default pastel palette, one entry per `SphereColor` in declaration order.
pub const PALETTE: [[f32; 3]; 6] = [
    [1.000, 0.718, 0.698], // rose
    [0.682, 0.776, 0.812], // sky
    [0.467, 0.867, 0.467], // mint
    [0.992, 0.992, 0.588], // lemon
    [0.765, 0.694, 0.882], // lavender
    [1.000, 0.702, 0.278], // apricot
];
