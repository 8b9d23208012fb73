//! Initial ring construction: rectangle walk and explicit-polygon builder.
//!
//! Positions are rounded to the nearest integer unit immediately after
//! placement and before any linking (pixel-snapping policy; applied by the
//! arena insert, so split midpoints snap the same way).

use nalgebra::Vector2;

use super::types::{NodeId, Ring, RingCfg};

impl Ring {
    /// Closed rectangular ring of `2*(nx+ny-2)` nodes spaced at
    /// `std_link_length`, traversed left-edge -> top-edge -> right-edge ->
    /// bottom-edge. The walk starts one step up from the below-left corner,
    /// so that corner is emitted last by the bottom edge.
    ///
    /// Panics if `nx < 2` or `ny < 2`.
    pub fn build_rectangle(cfg: RingCfg, center: Vector2<f64>, nx: usize, ny: usize) -> Ring {
        assert!(nx >= 2 && ny >= 2, "rectangle needs nx, ny >= 2, got {nx}x{ny}");
        let s = cfg.std_link_length();
        let dx = Vector2::new(s, 0.0);
        let dy = Vector2::new(0.0, s);
        let mut position =
            center - dx * ((nx as f64 - 1.0) / 2.0) - dy * ((ny as f64 - 1.0) / 2.0);

        let mut points = Vec::with_capacity(2 * (nx + ny - 2));
        for _ in 1..ny {
            position += dy;
            points.push(position);
        }
        for _ in 1..nx {
            position += dx;
            points.push(position);
        }
        for _ in 1..ny {
            position -= dy;
            points.push(position);
        }
        for _ in 1..nx {
            position -= dx;
            points.push(position);
        }
        Self::build_polygon(cfg, &points)
    }

    /// Closed ring from explicit perimeter positions in traversal order:
    /// each node links to its predecessor and successor, last to first.
    ///
    /// Panics if fewer than 3 positions are given.
    pub fn build_polygon(cfg: RingCfg, points: &[Vector2<f64>]) -> Ring {
        assert!(
            points.len() >= 3,
            "a ring needs at least 3 nodes, got {}",
            points.len()
        );
        let mut ring = Ring::with_cfg(cfg);
        let n = points.len();
        for (i, &point) in points.iter().enumerate() {
            let left = NodeId((i + n - 1) % n);
            let right = NodeId((i + 1) % n);
            ring.insert_node(point, left, right);
        }
        debug_assert!(ring.links_consistent());
        ring
    }
}
