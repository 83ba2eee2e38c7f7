// Host-side tests for the pure navigation step.

use glam::Vec3;
use walk_core::{nav, CameraPose, FloorPlan, KeyState, NavParams};

fn keys(forward: bool, backward: bool, left: bool, right: bool) -> KeyState {
    KeyState {
        forward,
        backward,
        turn_left: left,
        turn_right: right,
    }
}

#[test]
fn no_input_is_a_no_op() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default();
    let out = nav::step(pose, &KeyState::default(), 1.0 / 60.0, &plan, &NavParams::default());
    assert_eq!(out, pose);
}

#[test]
fn forward_moves_one_sixtieth_of_speed() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default(); // eye (0,0,10) looking at origin
    let out = nav::step(
        pose,
        &keys(true, false, false, false),
        1.0 / 60.0,
        &plan,
        &NavParams::default(),
    );
    let moved = (out.eye - pose.eye).length();
    // 10 units/s over 1/60 s
    assert!((moved - 10.0 / 60.0).abs() < 1e-5, "moved {moved}");
    // Along the horizontal view direction (-Z here).
    assert!(out.eye.z < pose.eye.z);
    assert!((out.eye.x - pose.eye.x).abs() < 1e-6);
    assert!((out.eye.y - pose.eye.y).abs() < 1e-6);
}

#[test]
fn displacement_is_frame_rate_independent() {
    let plan = FloorPlan::library();
    let params = NavParams::default();
    let input = keys(true, false, false, false);

    let mut coarse = CameraPose::default();
    for _ in 0..30 {
        coarse = nav::step(coarse, &input, 1.0 / 30.0, &plan, &params);
    }
    let mut fine = CameraPose::default();
    for _ in 0..60 {
        fine = nav::step(fine, &input, 1.0 / 60.0, &plan, &params);
    }
    assert!((coarse.eye - fine.eye).length() < 1e-4);
    // One second of unobstructed travel covers move_speed units.
    let travelled = (fine.eye - CameraPose::default().eye).length();
    assert!((travelled - params.move_speed).abs() < 1e-4, "travelled {travelled}");
}

#[test]
fn backward_negates_the_direction() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default();
    let out = nav::step(
        pose,
        &keys(false, true, false, false),
        1.0 / 60.0,
        &plan,
        &NavParams::default(),
    );
    assert!(out.eye.z > pose.eye.z);
}

#[test]
fn negative_delta_is_clamped() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default();
    let out = nav::step(
        pose,
        &keys(true, false, false, false),
        -0.5,
        &plan,
        &NavParams::default(),
    );
    assert_eq!(out, pose);
}

#[test]
fn turning_preserves_eye_and_offset_length() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default();
    let out = nav::step(
        pose,
        &keys(false, false, true, false),
        1.0 / 60.0,
        &plan,
        &NavParams::default(),
    );
    assert_eq!(out.eye, pose.eye);
    let before = pose.view_offset().length();
    let after = out.view_offset().length();
    assert!((before - after).abs() < 1e-4);
    assert!(out.target != pose.target, "turn did not rotate the view");
}

#[test]
fn opposite_turn_keys_cancel() {
    let plan = FloorPlan::library();
    let pose = CameraPose::default();
    let out = nav::step(
        pose,
        &keys(false, false, true, true),
        1.0 / 60.0,
        &plan,
        &NavParams::default(),
    );
    assert_eq!(out, pose);
}

#[test]
fn blocked_head_on_movement_stays_put() {
    let plan = FloorPlan::library();
    // Facing the west wall from just inside it.
    let eye = Vec3::new(-29.0, 1.6, 0.0);
    let pose = CameraPose::new(eye, eye + Vec3::new(-1.0, 0.0, 0.0));
    let out = nav::step(
        pose,
        &keys(true, false, false, false),
        0.1,
        &plan,
        &NavParams::default(),
    );
    assert_eq!(out.eye, pose.eye);
}

#[test]
fn diagonal_move_into_wall_slides_along_it() {
    let plan = FloorPlan::library();
    // Diagonal toward the west wall: the x component collides, the z
    // component is clear, so the camera should slide south along the wall.
    let eye = Vec3::new(-29.0, 1.6, 0.0);
    let pose = CameraPose::new(eye, eye + Vec3::new(-5.0, 0.0, -5.0));
    let out = nav::step(
        pose,
        &keys(true, false, false, false),
        0.1,
        &plan,
        &NavParams::default(),
    );
    assert!((out.eye.x - eye.x).abs() < 1e-6, "x should not change");
    assert!(out.eye.z < eye.z, "z should slide");
    assert!(
        !plan.blocked(out.eye, NavParams::default().clearance),
        "slide landed inside geometry"
    );
}

#[test]
fn resulting_position_is_never_inside_an_obstacle() {
    let plan = FloorPlan::library();
    let params = NavParams::default();
    // Walk straight at the reception desk from the south and keep pushing.
    let eye = Vec3::new(-5.0, 1.6, 11.0);
    let mut pose = CameraPose::new(eye, eye + Vec3::new(0.0, 0.0, -1.0));
    for _ in 0..120 {
        pose = nav::step(pose, &keys(true, false, false, false), 1.0 / 60.0, &plan, &params);
        assert!(
            !plan.blocked(pose.eye, params.clearance),
            "camera ended up inside geometry at {:?}",
            pose.eye
        );
    }
    // It must have stopped short of the desk footprint edge (z = 8.6 + r).
    assert!(pose.eye.z > 8.0);
}

#[test]
fn long_frame_hitch_cannot_tunnel_through_a_bust() {
    let plan = FloorPlan::library();
    let params = NavParams::default();
    // Bust footprint at (3.5, -2.0) spans z in [-2.4, -1.6] once expanded by
    // the clearance. Start just north of it, facing south, and feed a delta
    // long enough that an unclamped step (1.0 unit) would cross the whole
    // footprint and land clear on the far side.
    let eye = Vec3::new(3.5, 1.6, -1.5);
    let pose = CameraPose::new(eye, eye + Vec3::new(0.0, 0.0, -1.0));
    for dt in [0.1, 0.5, 10.0] {
        let out = nav::step(pose, &keys(true, false, false, false), dt, &plan, &params);
        assert!(
            out.eye.z > -1.6,
            "dt {dt}: camera crossed the bust, z {} -> {}",
            eye.z,
            out.eye.z
        );
        assert!(!plan.blocked(out.eye, params.clearance));
    }
}

#[test]
fn vertical_view_direction_moves_nothing() {
    let plan = FloorPlan::library();
    // Looking straight down: no horizontal component to move along.
    let eye = Vec3::new(0.0, 5.0, 0.0);
    let pose = CameraPose::new(eye, eye + Vec3::new(0.0, -1.0, 0.0));
    let out = nav::step(
        pose,
        &keys(true, false, false, false),
        0.1,
        &plan,
        &NavParams::default(),
    );
    assert_eq!(out.eye, pose.eye);
}
