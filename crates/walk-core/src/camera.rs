//! Camera types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The web frontend consumes
//! them to build view/projection matrices and to apply controller output to
//! the rendered scene.

use glam::{Mat4, Vec3};

use crate::constants::{default_eye_vec3, DEFAULT_FOVY_DEGREES};

/// Position plus look-at target. This is the unit of state the navigation
/// and transition controllers read and produce; exactly one of them writes
/// it per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Vector from the eye to the look-at target.
    #[inline]
    pub fn view_offset(&self) -> Vec3 {
        self.target - self.eye
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: default_eye_vec3(),
            target: Vec3::ZERO,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.eye,
            target: pose.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: DEFAULT_FOVY_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
