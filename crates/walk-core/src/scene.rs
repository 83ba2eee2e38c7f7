//! Per-frame routing between the two camera controllers.

use crate::camera::CameraPose;
use crate::input::KeyState;
use crate::nav::{self, NavParams};
use crate::transition::{CameraTransition, ViewState};
use crate::world::FloorPlan;

/// Owns the camera pose and decides, each frame, which controller may
/// mutate it: the view transition while one is in flight, otherwise manual
/// navigation (when the rig is enabled). Never both in the same frame.
pub struct SceneRig {
    pub pose: CameraPose,
    pub keys: KeyState,
    pub transition: CameraTransition,
    pub plan: FloorPlan,
    pub params: NavParams,
    /// Manual navigation is a no-op while this is false, e.g. when the 2D
    /// catalog overlay is open.
    pub controls_enabled: bool,
}

impl SceneRig {
    pub fn new(plan: FloorPlan) -> Self {
        Self {
            pose: CameraPose::default(),
            keys: KeyState::default(),
            transition: CameraTransition::default(),
            plan,
            params: NavParams::default(),
            controls_enabled: true,
        }
    }

    /// Route a hotspot click to the transition controller.
    pub fn select_view(&mut self, view: ViewState) {
        self.transition.set_view(view);
    }

    /// Advance one frame. Exactly one controller touches the pose.
    pub fn advance(&mut self, delta_sec: f32) -> CameraPose {
        if self.transition.is_active() {
            self.pose = self.transition.step(self.pose, delta_sec);
        } else if self.controls_enabled {
            self.pose = nav::step(self.pose, &self.keys, delta_sec, &self.plan, &self.params);
        }
        self.pose
    }
}
