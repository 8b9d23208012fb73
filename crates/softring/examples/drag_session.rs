//! Drive a sampled drag session for quick sanity on remeshing counts.
//!
//! Usage:
//!   cargo run -p softring --example drag_session -- gentle
//!   cargo run -p softring --example drag_session -- wild
//!
//! Prints node/active counts every 20 steps:
//! - gentle mode: short steps, mild turns; the ring mostly keeps its size
//! - wild mode: long steps, sharp turns; splits and removals dominate

use softring::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "gentle".to_string());
    match mode.as_str() {
        "gentle" => run_session(
            DragPathCfg {
                steps: 120,
                step_length: 4.0,
                max_turn: 0.15,
                initial_heading: 0.0,
            },
            2025,
        ),
        "wild" => run_session(
            DragPathCfg {
                steps: 120,
                step_length: 14.0,
                max_turn: 1.2,
                initial_heading: 0.0,
            },
            777,
        ),
        _ => {
            eprintln!("usage: drag_session [gentle|wild]");
        }
    }
}

fn run_session(cfg: DragPathCfg, seed: u64) {
    let mut ring = Ring::build_rectangle(RingCfg::default(), Vec2::new(0.0, 0.0), 10, 5);
    let mut tracker = MotionTracker::default();
    let mut pick = Vec2::new(24.0, 0.0);
    ring.activate_closest(pick);
    println!("start: nodes={} active={}", ring.len(), ring.active().len());
    for (i, delta) in draw_drag_path(cfg, ReplayToken { seed, index: 0 })
        .into_iter()
        .enumerate()
    {
        pick += delta;
        tracker.record(delta);
        ring.apply_drag(pick, delta, tracker.direction_now(), tracker.direction_old());
        if (i + 1) % 20 == 0 {
            println!(
                "step {:3}: nodes={} active={}",
                i + 1,
                ring.len(),
                ring.active().len()
            );
        }
    }
    ring.deactivate_all();
    println!("end:   nodes={} created={}", ring.len(), ring.total_created());
}
