//! Session scripts: the serde model plus the event loop that stands in for
//! a presentation layer.
//!
//! The loop owns the pointer state the engine deliberately does not: the
//! current pick location, the motion tracker, and the zero-delta filter (a
//! no-motion drag sample carries no directional information and is dropped
//! before it reaches the engine).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use softring::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
    #[serde(default = "default_length_scale")]
    pub length_scale: f64,
    /// Initial rectangle dimensions (nx, ny), both >= 2.
    #[serde(default = "default_rectangle")]
    pub rectangle: (usize, usize),
    #[serde(default)]
    pub center: (f64, f64),
    pub events: Vec<Event>,
}

fn default_length_scale() -> f64 {
    RingCfg::default().length_scale
}

fn default_rectangle() -> (usize, usize) {
    (10, 5)
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Press { x: f64, y: f64 },
    Drag { dx: f64, dy: f64 },
    Release,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub node_count: usize,
    pub splits: usize,
    pub removals: usize,
    pub active_peak: usize,
    /// Axis-aligned bounding box of the final perimeter: (min, max) corners.
    pub bounds: ((f64, f64), (f64, f64)),
}

pub fn load(path: &Path) -> Result<Session> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Drive a fresh ring through the scripted events.
pub fn replay(session: &Session) -> Report {
    let cfg = RingCfg {
        length_scale: session.length_scale,
        ..RingCfg::default()
    };
    let (nx, ny) = session.rectangle;
    let center = Vec2::new(session.center.0, session.center.1);
    let mut ring = Ring::build_rectangle(cfg, center, nx, ny);
    let initial = ring.len();

    let mut tracker = MotionTracker::default();
    let mut pick: Option<Vec2<f64>> = None;
    let mut active_peak = 0usize;

    for event in &session.events {
        match *event {
            Event::Press { x, y } => {
                let point = Vec2::new(x, y);
                ring.activate_closest(point);
                pick = Some(point);
                active_peak = active_peak.max(ring.active().len());
            }
            Event::Drag { dx, dy } => {
                if dx == 0.0 && dy == 0.0 {
                    continue;
                }
                // Drags before the first press have nothing to move.
                let Some(point) = pick.as_mut() else { continue };
                let delta = Vec2::new(dx, dy);
                *point += delta;
                tracker.record(delta);
                ring.apply_drag(*point, delta, tracker.direction_now(), tracker.direction_old());
                active_peak = active_peak.max(ring.active().len());
            }
            Event::Release => {
                ring.deactivate_all();
                tracker.clear();
                pick = None;
            }
        }
    }

    let created = ring.total_created();
    Report {
        node_count: ring.len(),
        splits: created - initial,
        removals: created - ring.len(),
        active_peak,
        bounds: bounds(&ring),
    }
}

/// Deterministic random session: one press, a sampled drag path, release.
pub fn sampled_session(seed: u64, steps: usize) -> Session {
    let cfg = DragPathCfg {
        steps,
        ..DragPathCfg::default()
    };
    let deltas = draw_drag_path(cfg, ReplayToken { seed, index: 0 });
    let mut events = vec![Event::Press { x: 24.0, y: 0.0 }];
    events.extend(deltas.iter().map(|d| Event::Drag { dx: d.x, dy: d.y }));
    events.push(Event::Release);
    Session {
        length_scale: default_length_scale(),
        rectangle: default_rectangle(),
        center: (0.0, 0.0),
        events,
    }
}

fn bounds(ring: &Ring) -> ((f64, f64), (f64, f64)) {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (_, node) in ring.iter() {
        min.0 = min.0.min(node.position.x);
        min.1 = min.1.min(node.position.y);
        max.0 = max.0.max(node.position.x);
        max.1 = max.1.max(node.position.y);
    }
    (min, max)
}
