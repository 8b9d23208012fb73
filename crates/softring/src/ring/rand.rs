//! Random drag paths (bounded-heading walks + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for drag sessions used by the
//!   randomized engine tests, the benches, and the example binary. The
//!   sampler is parameterizable, reproducible, and returns per-step deltas
//!   ready for `apply_drag`.
//!
//! Model
//! - Start from `initial_heading`, advance `steps` times by `step_length`,
//!   turning by a bounded uniform amount each step.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drag-path sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DragPathCfg {
    pub steps: usize,
    /// Per-step displacement magnitude. Clamped to >= 1e-6; zero-length
    /// steps carry no directional information and are filtered by callers.
    pub step_length: f64,
    /// Maximum heading change per step, radians.
    pub max_turn: f64,
    /// Heading of the first step, radians.
    pub initial_heading: f64,
}

impl Default for DragPathCfg {
    fn default() -> Self {
        Self {
            steps: 64,
            step_length: 6.0,
            max_turn: 0.35,
            initial_heading: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a reproducible drag path as per-step deltas.
pub fn draw_drag_path(cfg: DragPathCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let len = cfg.step_length.max(1e-6);
    let mut heading = cfg.initial_heading;
    (0..cfg.steps)
        .map(|_| {
            heading += (rng.gen::<f64>() * 2.0 - 1.0) * cfg.max_turn;
            Vector2::new(heading.cos(), heading.sin()) * len
        })
        .collect()
}
