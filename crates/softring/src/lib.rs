//! Deformable-ring engine.
//!
//! A closed loop of point nodes forms the perimeter of a soft shape. The
//! engine builds the initial polygon, selects the nodes nearest a pick
//! point, moves the selection under pointer motion (with a damped rotation
//! on gently curving drags), and keeps link lengths within bounds by
//! splitting stretched links and removing compressed neighbors.
//!
//! Presentation concerns (windowing, drawing, asset loading) live outside
//! this crate: callers forward press/drag/release events in and read the
//! node enumeration back out for drawing.

pub mod history;
pub mod ring;
pub mod tracker;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::history::BoundedHistoryQueue;
    pub use crate::ring::rand::{draw_drag_path, DragPathCfg, ReplayToken};
    pub use crate::ring::{Node, NodeId, NodeState, Ring, RingCfg};
    pub use crate::tracker::MotionTracker;
    pub use nalgebra::Vector2 as Vec2;
}
