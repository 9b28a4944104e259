//! Root-transform pose and the exponential damping that advances it.
//!
//! Axis convention, fixed once for the whole scene: the phone's screen faces
//! +Z at rest and +Y is up. The primary spin is yaw about +Y and the lean is
//! roll about +Z. All offset signs elsewhere derive from this convention.

use glam::Vec3;

/// Position plus Euler rotation (radians) of the phone's root transform.
///
/// The current pose is the only persistent mutable state in the scene; the
/// choreographer owns it exclusively and rewrites it every rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    /// Resting pose: centered, screen toward the camera.
    pub fn rest() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Advance every animated scalar toward `target` with frame-rate
    /// independent damping.
    pub fn damp_toward(&mut self, target: &Pose, rate: f32, dt: f32) {
        self.position.x = damp(self.position.x, target.position.x, rate, dt);
        self.position.y = damp(self.position.y, target.position.y, rate, dt);
        self.position.z = damp(self.position.z, target.position.z, rate, dt);
        self.rotation.x = damp(self.rotation.x, target.rotation.x, rate, dt);
        self.rotation.y = damp(self.rotation.y, target.rotation.y, rate, dt);
        self.rotation.z = damp(self.rotation.z, target.rotation.z, rate, dt);
    }
}

/// Exponential smoothing toward `target`.
///
/// The blend factor `1 - e^(-rate*dt)` stays below 1 for any positive
/// `rate*dt`, so the value converges without overshoot regardless of frame
/// rate, and a value already at the target stays there.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}
