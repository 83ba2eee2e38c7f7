//! First-person navigation with wall sliding.
//!
//! `step` is a pure function: (pose, keys, delta, plan, params) -> new pose.
//! The web frontend wraps it in a thin adapter that applies the result to
//! the live camera each animation frame.

use glam::{Quat, Vec3};

use crate::camera::CameraPose;
use crate::constants::{CLEARANCE_RADIUS, MOVE_SPEED, NAV_MAX_STEP_SEC, TURN_SPEED};
use crate::input::KeyState;
use crate::world::FloorPlan;

/// Tuning for the navigation controller. Speeds are per second and scaled
/// by the frame delta, so motion is frame-rate independent.
#[derive(Clone, Copy, Debug)]
pub struct NavParams {
    pub move_speed: f32,
    pub turn_speed: f32,
    pub clearance: f32,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            clearance: CLEARANCE_RADIUS,
        }
    }
}

/// Advance the camera one frame of manual navigation.
///
/// Turning rotates the view offset about +Y; holding both turn keys nets to
/// zero rotation. Forward/backward move along the horizontal projection of
/// the (possibly rotated) view direction. Displacement that would collide is
/// retried restricted to the x axis, then the z axis, then dropped, which
/// slides the camera along walls instead of stopping it dead. The delta is
/// clamped to [0, NAV_MAX_STEP_SEC]: negative deltas can never run movement
/// backwards, and a long hitch (backgrounded tab) can never produce a step
/// large enough to tunnel through a footprint.
pub fn step(
    pose: CameraPose,
    keys: &KeyState,
    delta_sec: f32,
    plan: &FloorPlan,
    params: &NavParams,
) -> CameraPose {
    if !keys.any_pressed() {
        return pose;
    }
    let dt = delta_sec.clamp(0.0, NAV_MAX_STEP_SEC);

    let mut offset = pose.view_offset();

    // 1. Rotation. Left turns counter-clockwise around global up.
    let turn = (keys.turn_left as i32 - keys.turn_right as i32) as f32;
    if turn != 0.0 {
        offset = Quat::from_rotation_y(turn * params.turn_speed * dt) * offset;
    }

    // 2. Candidate displacement, constrained to the floor.
    let mut displacement = Vec3::ZERO;
    if keys.forward != keys.backward {
        let mut dir = Vec3::new(offset.x, 0.0, offset.z);
        if dir.length_squared() > 1e-3 {
            dir = dir.normalize();
            if keys.backward {
                dir = -dir;
            }
            displacement = dir * (params.move_speed * dt);
        }
    }

    // 3. Collision resolution: full move, then x-only, then z-only, then
    // stay put.
    let eye = pose.eye;
    let applied = if displacement == Vec3::ZERO {
        Vec3::ZERO
    } else if !plan.blocked(eye + displacement, params.clearance) {
        displacement
    } else {
        let x_only = Vec3::new(displacement.x, 0.0, 0.0);
        let z_only = Vec3::new(0.0, 0.0, displacement.z);
        if displacement.x.abs() > 1e-4 && !plan.blocked(eye + x_only, params.clearance) {
            x_only
        } else if displacement.z.abs() > 1e-4 && !plan.blocked(eye + z_only, params.clearance) {
            z_only
        } else {
            Vec3::ZERO
        }
    };

    // 4. Re-derive the target from the rotated offset so the framing stays
    // consistent with whatever rotation was applied.
    let eye = eye + applied;
    CameraPose {
        eye,
        target: eye + offset,
    }
}
