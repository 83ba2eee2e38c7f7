// Host-side tests for view-state camera transitions and the per-frame
// routing between the two controllers.

use glam::Vec3;
use walk_core::{
    CameraPose, CameraTransition, FloorPlan, SceneRig, ViewState, TRANSITION_TIMEOUT_SEC,
};

const DT: f32 = 1.0 / 60.0;

fn run_to_completion(t: &mut CameraTransition, mut pose: CameraPose) -> (CameraPose, usize) {
    let mut frames = 0;
    while t.is_active() {
        pose = t.step(pose, DT);
        frames += 1;
        assert!(frames < 1000, "transition never ended");
    }
    (pose, frames)
}

#[test]
fn set_view_raises_the_flag_immediately() {
    let mut t = CameraTransition::default();
    assert!(!t.is_active());
    t.set_view(ViewState::Contact);
    assert!(t.is_active());
}

#[test]
fn flag_drops_no_later_than_the_timeout() {
    let mut t = CameraTransition::default();
    t.set_view(ViewState::Contact);
    let (_, frames) = run_to_completion(&mut t, CameraPose::default());
    let max_frames = (TRANSITION_TIMEOUT_SEC / DT).ceil() as usize + 1;
    assert!(frames <= max_frames, "{frames} frames > {max_frames}");
}

#[test]
fn contact_transition_lands_near_its_destination() {
    let mut t = CameraTransition::default();
    t.set_view(ViewState::Contact);
    let (pose, _) = run_to_completion(&mut t, CameraPose::default());
    let want = Vec3::new(8.0, 1.6, 10.0);
    assert!(
        (pose.eye - want).length() < 0.05,
        "eye {:?} not near {want:?}",
        pose.eye
    );
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut coarse = CameraTransition::default();
    coarse.set_view(ViewState::Projects);
    let mut fine = CameraTransition::default();
    fine.set_view(ViewState::Projects);

    let mut pose_a = CameraPose::default();
    for _ in 0..30 {
        pose_a = coarse.step(pose_a, 1.0 / 30.0);
    }
    let mut pose_b = CameraPose::default();
    for _ in 0..60 {
        pose_b = fine.step(pose_b, 1.0 / 60.0);
    }
    assert!((pose_a.eye - pose_b.eye).length() < 1e-3);
}

#[test]
fn new_view_retargets_instead_of_queueing() {
    let mut t = CameraTransition::default();
    t.set_view(ViewState::Contact);
    let mut pose = CameraPose::default();
    for _ in 0..30 {
        pose = t.step(pose, DT);
    }
    t.set_view(ViewState::Languages);
    let (pose, _) = run_to_completion(&mut t, pose);
    let want = Vec3::new(-8.0, -3.0, 4.0);
    assert!((pose.eye - want).length() < 0.05, "eye {:?}", pose.eye);
}

#[test]
fn reselecting_the_same_view_restarts_the_timer() {
    let mut t = CameraTransition::default();
    t.set_view(ViewState::Contact);
    let mut pose = CameraPose::default();
    // 2 seconds in, then re-enter the same view.
    for _ in 0..120 {
        pose = t.step(pose, DT);
    }
    t.set_view(ViewState::Contact);
    // 1 more second; without the restart the deadline would have passed.
    for _ in 0..60 {
        pose = t.step(pose, DT);
    }
    assert!(t.is_active());
}

#[test]
fn step_when_idle_returns_the_pose_untouched() {
    let mut t = CameraTransition::default();
    let pose = CameraPose::new(Vec3::new(3.0, 1.0, 2.0), Vec3::ZERO);
    assert_eq!(t.step(pose, DT), pose);
}

#[test]
fn hotspot_ids_resolve_and_unknown_falls_back() {
    assert_eq!(ViewState::from_hotspot("projects"), ViewState::Projects);
    assert_eq!(ViewState::from_hotspot("contact"), ViewState::Contact);
    assert_eq!(ViewState::from_hotspot("languages"), ViewState::Languages);
    assert_eq!(ViewState::from_hotspot("privacy"), ViewState::Privacy);
    assert_eq!(ViewState::from_hotspot("universe"), ViewState::Universe);
    assert_eq!(ViewState::from_hotspot("atlantis"), ViewState::Universe);
    assert_eq!(ViewState::from_hotspot(""), ViewState::Universe);
}

// ---------------- Scene rig routing ----------------

#[test]
fn manual_input_is_ignored_while_transitioning() {
    let mut with_keys = SceneRig::new(FloorPlan::library());
    with_keys.select_view(ViewState::Contact);
    with_keys.keys.forward = true;
    with_keys.keys.turn_left = true;

    let mut without_keys = SceneRig::new(FloorPlan::library());
    without_keys.select_view(ViewState::Contact);

    for _ in 0..30 {
        with_keys.advance(DT);
        without_keys.advance(DT);
    }
    assert_eq!(with_keys.pose, without_keys.pose);
}

#[test]
fn navigation_resumes_after_the_transition_ends() {
    let mut rig = SceneRig::new(FloorPlan::library());
    rig.select_view(ViewState::Universe);
    rig.keys.forward = true;
    // Run well past the deadline.
    for _ in 0..((TRANSITION_TIMEOUT_SEC / DT) as usize + 10) {
        rig.advance(DT);
    }
    let at_handback = rig.pose;
    rig.advance(DT);
    assert!(rig.pose.eye != at_handback.eye, "manual control never resumed");
}

#[test]
fn disabled_controls_make_manual_navigation_a_no_op() {
    let mut rig = SceneRig::new(FloorPlan::library());
    rig.controls_enabled = false;
    rig.keys.forward = true;
    let before = rig.pose;
    rig.advance(DT);
    assert_eq!(rig.pose, before);
}

#[test]
fn disabling_controls_does_not_stop_a_transition() {
    let mut rig = SceneRig::new(FloorPlan::library());
    rig.controls_enabled = false;
    rig.select_view(ViewState::Projects);
    let before = rig.pose;
    rig.advance(DT);
    assert!(rig.pose != before, "transition should still animate");
}
