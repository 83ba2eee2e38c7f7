use glam::Vec3;

// Shared tuning constants used by both the pure core and the web frontend.

// Manual navigation
pub const MOVE_SPEED: f32 = 10.0; // world units per second
pub const TURN_SPEED: f32 = 2.0; // radians per second
pub const CLEARANCE_RADIUS: f32 = 0.2; // keeps the camera eye from clipping geometry

// Upper clamp on one navigation step. The narrowest clearance-expanded
// footprint is a bust, 0.8 units deep; one step must stay under that or a
// long frame hitch at full speed (10 u/s) jumps the endpoint clean over the
// obstacle and the collision test never fires.
pub const NAV_MAX_STEP_SEC: f32 = 0.05;

// Library floor bounds (horizontal plane)
pub const FLOOR_MIN_X: f32 = -29.5;
pub const FLOOR_MAX_X: f32 = 29.5;
pub const FLOOR_MIN_Z: f32 = -52.0;
pub const FLOOR_MAX_Z: f32 = 15.0;

// Repeating structure: three parallel halls, eight bays each
pub const HALL_OFFSETS_X: [f32; 3] = [-20.0, 0.0, 20.0];
pub const NUM_BAYS: usize = 8;
pub const FIRST_BAY_Z: f32 = -5.0;
pub const BAY_SPACING: f32 = 6.0;

// View-state camera transition
pub const TRANSITION_TIMEOUT_SEC: f32 = 2.5; // hard hand-back deadline
pub const TRANSITION_TAU_SEC: f32 = 0.35; // exponential damping time constant

// Default (universe) camera framing
pub const DEFAULT_EYE: [f32; 3] = [0.0, 0.0, 10.0];
pub const DEFAULT_FOVY_DEGREES: f32 = 75.0;

#[inline]
pub fn default_eye_vec3() -> Vec3 {
    Vec3::from(DEFAULT_EYE)
}
