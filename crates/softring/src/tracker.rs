//! Pointer-motion smoothing: per-event deltas aggregated into trailing
//! "direction" signals for the drag transform.
//!
//! The tracker belongs to the presentation layer, not the engine:
//! `Ring::apply_drag` accepts the two direction peeks rather than the
//! tracker itself, so the engine never owns pointer state.

use nalgebra::Vector2;

use crate::history::BoundedHistoryQueue;

/// Two stacked bounded queues: raw deltas in front, summed directions behind.
///
/// Each recorded delta enters the first queue; once that window is full,
/// the component-wise sum of its contents is pushed as the newest entry of
/// the second. The front and back of the second queue are the "now" and
/// "old" direction signals consumed by the drag transform.
#[derive(Clone, Debug)]
pub struct MotionTracker {
    deltas: BoundedHistoryQueue<Vector2<f64>>,
    directions: BoundedHistoryQueue<Vector2<f64>>,
}

impl Default for MotionTracker {
    /// Five raw samples per direction epoch, twelve trailing epochs.
    fn default() -> Self {
        Self::new(5, 12)
    }
}

impl MotionTracker {
    /// Panics if either window is zero.
    pub fn new(delta_window: usize, direction_window: usize) -> Self {
        Self {
            deltas: BoundedHistoryQueue::new(delta_window),
            directions: BoundedHistoryQueue::new(direction_window),
        }
    }

    /// Record one drag delta. Once the delta window is full, its sum is
    /// pushed as the newest direction sample.
    pub fn record(&mut self, delta: Vector2<f64>) {
        self.deltas.push(delta);
        if self.deltas.is_full() {
            let sum = self
                .deltas
                .iter()
                .fold(Vector2::zeros(), |acc, &d| acc + d);
            self.directions.push(sum);
        }
    }

    /// Newest aggregated direction, if enough history exists yet.
    #[inline]
    pub fn direction_now(&self) -> Option<Vector2<f64>> {
        self.directions.peek_front().copied()
    }

    /// Oldest aggregated direction still in the window.
    #[inline]
    pub fn direction_old(&self) -> Option<Vector2<f64>> {
        self.directions.peek_back().copied()
    }

    /// Forget all history (pointer release).
    pub fn clear(&mut self) {
        self.deltas.clear();
        self.directions.clear();
    }
}
