//! Maps the page scroll fraction to the phone's pose and active skin.

use crate::constants::{
    BOB_AMPLITUDE, DAMPING_RATE, FACING_BIAS, LEAN_FACTOR, SIDE_OFFSET_X, SKIN_COUNT,
};
use crate::pose::Pose;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct ChoreographyParams {
    pub skin_count: usize,
    pub side_offset_x: f32,
    pub damping_rate: f32,
    pub bob_amplitude: f32,
    pub lean_factor: f32,
    pub facing_bias: f32,
}

impl Default for ChoreographyParams {
    fn default() -> Self {
        Self {
            skin_count: SKIN_COUNT,
            side_offset_x: SIDE_OFFSET_X,
            damping_rate: DAMPING_RATE,
            bob_amplitude: BOB_AMPLITUDE,
            lean_factor: LEAN_FACTOR,
            facing_bias: FACING_BIAS,
        }
    }
}

impl ChoreographyParams {
    // Zero skins is a configuration error, not a runtime fault.
    fn normalized(mut self) -> Self {
        if self.skin_count == 0 {
            log::warn!("skin_count of 0 is a configuration error; clamping to 1");
            self.skin_count = 1;
        }
        self
    }
}

/// Which of `count` skins is active at `scroll`.
///
/// Clamped, never wrapped: `scroll == 1.0` selects the last skin instead of
/// indexing past the end.
#[inline]
pub fn skin_index(scroll: f32, count: usize) -> usize {
    let count = count.max(1);
    let s = scroll.clamp(0.0, 1.0);
    ((s * count as f32) as usize).min(count - 1)
}

/// Target pose for a given skin, as a pure function of current-frame inputs.
///
/// `current_x` feeds only the lean term: the phone banks in proportion to how
/// far it still has to travel toward its parked side. The parity-derived X
/// target is computed first so the lean is never a frame stale.
pub fn pose_target(
    params: &ChoreographyParams,
    skin: usize,
    elapsed: f32,
    current_x: f32,
) -> Pose {
    let side = if skin % 2 == 0 { 1.0 } else { -1.0 };
    let target_x = side * params.side_offset_x;
    // One full turn per skin change. The target accumulates monotonically and
    // is never normalized into [0, 2*PI), so damping always turns the short
    // way forward instead of snapping back through a wrap.
    let yaw = skin as f32 * TAU - side * params.facing_bias;
    let bob = elapsed.sin() * params.bob_amplitude;
    let lean = (target_x - current_x) * params.lean_factor;
    Pose {
        position: Vec3::new(target_x, bob, 0.0),
        rotation: Vec3::new(0.0, yaw, lean),
    }
}

/// Owns the phone's current pose and advances it once per rendered frame.
///
/// Target pose and skin index are recomputed from the frame's inputs every
/// call; nothing besides the current pose survives between frames.
pub struct ScrollChoreographer {
    params: ChoreographyParams,
    pose: Pose,
}

impl ScrollChoreographer {
    pub fn new(params: ChoreographyParams) -> Self {
        Self {
            params: params.normalized(),
            pose: Pose::rest(),
        }
    }

    pub fn params(&self) -> &ChoreographyParams {
        &self.params
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Advance one frame: pick the skin for `scroll`, damp the pose toward
    /// its target, and return the skin index for the caller to bind.
    pub fn advance(&mut self, scroll: f32, elapsed: f32, dt: f32) -> usize {
        let skin = skin_index(scroll, self.params.skin_count);
        let target = pose_target(&self.params, skin, elapsed, self.pose.position.x);
        self.pose.damp_toward(&target, self.params.damping_rate, dt);
        skin
    }
}
