//! View-state camera transitions.
//!
//! Every hotspot click changes the active view; the camera then glides from
//! wherever it is to the pose registered for that view. The glide is an
//! exponential damp toward the destination, which never mathematically
//! reaches it, so a fixed timeout ends the transition and hands control back
//! to manual navigation. New view changes retarget an in-flight transition
//! rather than queueing behind it.

use glam::Vec3;

use crate::camera::CameraPose;
use crate::constants::{TRANSITION_TAU_SEC, TRANSITION_TIMEOUT_SEC};

/// The closed set of views the site can show. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Overview of all galaxies; the resting state.
    #[default]
    Universe,
    /// Drill-down into the project catalog.
    Projects,
    Contact,
    Languages,
    Privacy,
}

impl ViewState {
    /// Resolve a hotspot identifier coming from the DOM. Unknown ids fall
    /// back to the universe overview rather than failing.
    pub fn from_hotspot(id: &str) -> Self {
        match id {
            "universe" => Self::Universe,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            "languages" => Self::Languages,
            "privacy" => Self::Privacy,
            other => {
                log::debug!("[view] unknown hotspot '{other}', falling back to universe");
                Self::Universe
            }
        }
    }

    /// Fixed destination pose for each view, authored once.
    pub fn destination_pose(self) -> CameraPose {
        match self {
            Self::Universe => CameraPose::default(),
            Self::Projects => CameraPose::new(Vec3::new(0.0, 14.0, 20.0), Vec3::ZERO),
            Self::Contact => {
                CameraPose::new(Vec3::new(8.0, 1.6, 10.0), Vec3::new(10.0, 5.0, -5.0))
            }
            Self::Languages => {
                CameraPose::new(Vec3::new(-8.0, -3.0, 4.0), Vec3::new(-10.0, -5.0, -5.0))
            }
            Self::Privacy => {
                CameraPose::new(Vec3::new(0.0, -7.5, 12.0), Vec3::new(0.0, -10.0, 5.0))
            }
        }
    }
}

/// Two-state controller: idle, or transitioning toward the active view's
/// destination until the deadline passes.
#[derive(Clone, Copy, Debug)]
pub struct CameraTransition {
    view: ViewState,
    destination: CameraPose,
    remaining_sec: f32,
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            destination: ViewState::default().destination_pose(),
            remaining_sec: 0.0,
        }
    }
}

impl CameraTransition {
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// True while a camera animation is in flight; manual navigation must
    /// stand aside for as long as this holds.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining_sec > 0.0
    }

    /// Switch views and (re)arm the timer. Re-selecting the current view
    /// restarts the glide toward the same destination; a change while a
    /// previous transition is in flight simply retargets it.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
        self.destination = view.destination_pose();
        self.remaining_sec = TRANSITION_TIMEOUT_SEC;
    }

    /// Advance the glide one frame. Eye and target are damped independently;
    /// the per-frame step is proportional to remaining distance and elapsed
    /// time, so convergence speed does not depend on frame rate. Once the
    /// deadline elapses the pose is returned untouched.
    pub fn step(&mut self, pose: CameraPose, delta_sec: f32) -> CameraPose {
        if !self.is_active() {
            return pose;
        }
        let dt = delta_sec.max(0.0);
        self.remaining_sec -= dt;

        let alpha = 1.0 - (-dt / TRANSITION_TAU_SEC).exp();
        CameraPose {
            eye: pose.eye + (self.destination.eye - pose.eye) * alpha,
            target: pose.target + (self.destination.target - pose.target) * alpha,
        }
    }
}
