//! Drag transform: translate the active set, with a damped rotation about
//! the pick point on gently curving drags.
//!
//! Mode policy
//! - Thresholds compare the raw (wrapped) turn between the old and new
//!   direction signals; the applied rotation is that angle divided by
//!   `TURN_DAMPING`. Sharp turns pure-translate (the cluster should not
//!   whip around on jerky input), and so do exact-zero estimates.
//! - The lower threshold is exactly zero, so it excludes nothing but a
//!   zero estimate. Preserved deliberately.

use nalgebra::{Rotation2, Vector2};

use super::types::Ring;

/// Turns sharper than this (radians) suppress rotation.
pub const MAX_TURN_ANGLE: f64 = std::f64::consts::PI / 18.0;
/// Turns at or below this (radians) suppress rotation.
pub const MIN_TURN_ANGLE: f64 = 0.0;
/// Divisor applied to the turn angle before rotating the active set.
pub const TURN_DAMPING: f64 = 10.0;

impl Ring {
    /// Move every active node by `delta`; on a gentle turn, additionally
    /// rotate the moved nodes about `pick` by the damped turn angle. A
    /// remeshing pass always follows.
    ///
    /// `direction_now`/`direction_old` are aggregated pointer-motion
    /// signals (see `MotionTracker`); `None` or zero vectors estimate a
    /// zero turn. Callers filter zero `delta` events before calling, since
    /// a no-motion sample carries no directional information.
    ///
    /// A link stretched past twice the maximum in a single step stays
    /// over-long until the next call: remeshing splits each link at most
    /// once per pass.
    pub fn apply_drag(
        &mut self,
        pick: Vector2<f64>,
        delta: Vector2<f64>,
        direction_now: Option<Vector2<f64>>,
        direction_old: Option<Vector2<f64>>,
    ) {
        let angle = turn_angle(direction_now, direction_old);
        let turn = angle.abs();

        for i in 0..self.active.len() {
            let id = self.active[i];
            self.node_mut(id).position += delta;
        }
        if turn > MIN_TURN_ANGLE && turn <= MAX_TURN_ANGLE {
            let rot = Rotation2::new(angle / TURN_DAMPING);
            for i in 0..self.active.len() {
                let id = self.active[i];
                let node = self.node_mut(id);
                node.position = pick + rot * (node.position - pick);
            }
        }
        self.remesh_active();
    }
}

/// Signed turn between the two direction signals, wrapped into `(-pi, pi]`.
/// Missing or zero signals estimate to zero.
fn turn_angle(now: Option<Vector2<f64>>, old: Option<Vector2<f64>>) -> f64 {
    let (Some(now), Some(old)) = (now, old) else {
        return 0.0;
    };
    if now.norm_squared() == 0.0 || old.norm_squared() == 0.0 {
        return 0.0;
    }
    wrap_angle(signed_angle(old, now))
}

/// Signed angle from `a` to `b`, in `(-pi, pi]`.
#[inline]
pub(crate) fn signed_angle(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x * b.y - a.y * b.x).atan2(a.dot(&b))
}

/// Normalize an angle into `(-pi, pi]`.
#[inline]
pub(crate) fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -std::f64::consts::PI {
        x += 2.0 * std::f64::consts::PI;
    }
    while x > std::f64::consts::PI {
        x -= 2.0 * std::f64::consts::PI;
    }
    x
}
