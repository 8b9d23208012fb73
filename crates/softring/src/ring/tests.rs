use super::rand::{draw_drag_path, DragPathCfg, ReplayToken};
use super::*;
use crate::tracker::MotionTracker;
use nalgebra::Vector2;

/// Follow `right` from an arbitrary start until the walk closes; asserts
/// the walk never escapes the live set.
fn walk_right(ring: &Ring) -> Vec<NodeId> {
    let (start, _) = ring.iter().next().expect("ring is empty");
    let mut ids = vec![start];
    let mut cur = ring.get(start).unwrap().right;
    while cur != start {
        ids.push(cur);
        assert!(ids.len() <= ring.len(), "walk escaped the ring");
        cur = ring.get(cur).unwrap().right;
    }
    ids
}

fn link_length(ring: &Ring, a: NodeId, b: NodeId) -> f64 {
    (ring.get(a).unwrap().position - ring.get(b).unwrap().position).norm()
}

/// 6x2 rectangle around the origin with `length_scale = 16` (spacing 48).
/// Arena order: n0 = (-120, 24), n1..n5 along the top edge to (120, 24),
/// n6 = (120, -24), n7..n11 along the bottom edge back to (-120, -24).
fn six_by_two() -> Ring {
    Ring::build_rectangle(RingCfg::default(), Vector2::new(0.0, 0.0), 6, 2)
}

#[test]
fn rectangle_counts_closure_and_spacing() {
    for &(nx, ny) in &[(2usize, 2usize), (10, 5), (3, 7)] {
        let cfg = RingCfg::default();
        let ring = Ring::build_rectangle(cfg, Vector2::new(320.5, 240.5), nx, ny);
        let expected = 2 * (nx + ny - 2);
        assert_eq!(ring.len(), expected, "{nx}x{ny}");
        assert_eq!(walk_right(&ring).len(), expected);
        assert!(ring.links_consistent());
        for (id, node) in ring.iter() {
            let length = link_length(&ring, id, node.right);
            assert!(
                (length - cfg.std_link_length()).abs() < 1e-9,
                "{nx}x{ny}: link {length} != std"
            );
        }
    }
}

#[test]
fn rectangle_positions_are_integer_snapped() {
    let ring = Ring::build_rectangle(RingCfg::default(), Vector2::new(11.3, -2.7), 4, 3);
    for (_, node) in ring.iter() {
        assert_eq!(node.position.x, node.position.x.round());
        assert_eq!(node.position.y, node.position.y.round());
    }
}

#[test]
#[should_panic(expected = "nx, ny >= 2")]
fn rectangle_rejects_degenerate_dims() {
    let _ = Ring::build_rectangle(RingCfg::default(), Vector2::zeros(), 1, 5);
}

#[test]
#[should_panic(expected = "at least 3 nodes")]
fn polygon_rejects_fewer_than_three_points() {
    let _ = Ring::build_polygon(
        RingCfg::default(),
        &[Vector2::new(0.0, 0.0), Vector2::new(48.0, 0.0)],
    );
}

#[test]
fn activation_selects_nearest_in_ascending_order() {
    let mut ring = six_by_two();
    ring.activate_closest(Vector2::new(0.0, 24.0));

    // Two top-edge nodes at distance 24, then the two bottom-edge nodes
    // facing them across the strip; the ranked list is closest-first.
    assert_eq!(
        ring.active(),
        &[NodeId(2), NodeId(3), NodeId(8), NodeId(9)]
    );
    for (id, node) in ring.iter() {
        let expected = if ring.active().contains(&id) {
            NodeState::Active
        } else {
            NodeState::Inactive
        };
        assert_eq!(node.state, expected, "{id:?}");
    }
}

#[test]
fn activation_is_bounded_by_target_count() {
    let mut ring = Ring::build_rectangle(RingCfg::default(), Vector2::zeros(), 10, 5);
    ring.activate_closest(Vector2::new(1000.0, 1000.0));
    assert!(!ring.active().is_empty());
    assert!(ring.active().len() <= ring.cfg().activation_count);
}

#[test]
fn activation_fills_single_node_gaps() {
    // Five near nodes n0..n4 with n2 pushed far out, three far nodes
    // closing the loop. The k-nearest pass picks n0, n1, n3, n4; n2 sits
    // alone between two selected flanks and is promoted afterwards.
    let points = [
        Vector2::new(100.0, 0.0),
        Vector2::new(80.0, 60.0),
        Vector2::new(10.0, 200.0),
        Vector2::new(-80.0, 60.0),
        Vector2::new(-100.0, 0.0),
        Vector2::new(-120.0, -250.0),
        Vector2::new(0.0, -300.0),
        Vector2::new(120.0, -250.0),
    ];
    let mut ring = Ring::build_polygon(RingCfg::default(), &points);
    ring.activate_closest(Vector2::zeros());

    assert_eq!(
        ring.active(),
        &[NodeId(0), NodeId(1), NodeId(3), NodeId(4), NodeId(2)]
    );
    assert_eq!(ring.get(NodeId(2)).unwrap().state, NodeState::Active);
    assert_eq!(ring.get(NodeId(6)).unwrap().state, NodeState::Inactive);
}

#[test]
fn deactivate_all_is_idempotent() {
    let mut ring = six_by_two();
    ring.activate_closest(Vector2::new(0.0, 24.0));
    assert!(!ring.active().is_empty());

    ring.deactivate_all();
    assert!(ring.active().is_empty());
    assert!(ring.iter().all(|(_, n)| n.state == NodeState::Inactive));

    ring.deactivate_all();
    assert!(ring.active().is_empty());
    assert!(ring.iter().all(|(_, n)| n.state == NodeState::Inactive));
}

#[test]
fn drag_translates_active_nodes_only() {
    let mut ring = six_by_two();
    ring.activate_closest(Vector2::new(0.0, 24.0));
    let before: Vec<(NodeId, Vector2<f64>)> =
        ring.iter().map(|(id, n)| (id, n.position)).collect();
    let delta = Vector2::new(10.0, 4.0);

    ring.apply_drag(Vector2::new(0.0, 24.0), delta, None, None);

    assert_eq!(ring.len(), 12, "small drag must not remesh");
    for (id, old) in before {
        let now = ring.get(id).unwrap().position;
        let expected = if ring.active().contains(&id) { old + delta } else { old };
        assert!((now - expected).norm() < 1e-12, "{id:?}");
    }
}

#[test]
fn gentle_turn_rotates_about_the_pick_point() {
    let mut ring = six_by_two();
    let pick = Vector2::new(0.0, 24.0);
    ring.activate_closest(pick);
    let delta = Vector2::new(1.0, 0.0);
    let five_deg = std::f64::consts::PI / 36.0;
    let now = Vector2::new(five_deg.cos(), five_deg.sin());

    ring.apply_drag(pick, delta, Some(now), Some(Vector2::new(1.0, 0.0)));

    // Raw 5 degree turn is inside the window; applied rotation is 0.5 deg.
    let applied = five_deg / TURN_DAMPING;
    let (sin, cos) = applied.sin_cos();
    // n3 started at (24, 24); translated to (25, 24), then rotated.
    let r = Vector2::new(25.0, 0.0);
    let expected = pick + Vector2::new(r.x * cos - r.y * sin, r.x * sin + r.y * cos);
    let got = ring.get(NodeId(3)).unwrap().position;
    assert!((got - expected).norm() < 1e-9, "got {got:?}, expected {expected:?}");
    // n9 started at (-24, -24); same transform, larger radius.
    let r = Vector2::new(-23.0, -48.0);
    let expected = pick + Vector2::new(r.x * cos - r.y * sin, r.x * sin + r.y * cos);
    let got = ring.get(NodeId(9)).unwrap().position;
    assert!((got - expected).norm() < 1e-9);
}

#[test]
fn sharp_turn_translates_without_rotation() {
    let mut ring = six_by_two();
    let pick = Vector2::new(0.0, 24.0);
    ring.activate_closest(pick);
    let delta = Vector2::new(1.0, 0.0);

    // 90 degree raw turn exceeds the 10 degree window.
    ring.apply_drag(pick, delta, Some(Vector2::new(0.0, 1.0)), Some(Vector2::new(1.0, 0.0)));

    let got = ring.get(NodeId(3)).unwrap().position;
    assert!((got - Vector2::new(25.0, 24.0)).norm() < 1e-12);
}

#[test]
fn zero_direction_signal_translates_without_rotation() {
    let mut ring = six_by_two();
    let pick = Vector2::new(0.0, 24.0);
    ring.activate_closest(pick);
    let delta = Vector2::new(1.0, 0.0);

    ring.apply_drag(pick, delta, Some(Vector2::zeros()), Some(Vector2::new(1.0, 0.0)));

    let got = ring.get(NodeId(3)).unwrap().position;
    assert!((got - Vector2::new(25.0, 24.0)).norm() < 1e-12);
}

#[test]
fn stretching_drag_splits_links_at_midpoints() {
    let mut ring = six_by_two();
    ring.activate_closest(Vector2::new(0.0, 24.0));
    assert_eq!(ring.active(), &[NodeId(2), NodeId(3), NodeId(8), NodeId(9)]);

    // Lifting the selection by 60 stretches the four links that tie it to
    // the stationary neighbors to ~76.8 > 72; each splits once.
    ring.apply_drag(Vector2::new(0.0, 84.0), Vector2::new(0.0, 60.0), None, None);

    assert_eq!(ring.len(), 16);
    assert_eq!(ring.total_created(), 16);
    assert_eq!(walk_right(&ring).len(), 16);
    assert_eq!(ring.active().len(), 4, "split nodes start inactive");
    for id in [NodeId(12), NodeId(13), NodeId(14), NodeId(15)] {
        assert_eq!(ring.get(id).unwrap().state, NodeState::Inactive);
    }
    // Midpoints snapped to the grid.
    assert_eq!(ring.get(NodeId(12)).unwrap().position, Vector2::new(-48.0, 54.0));
    // Every link incident to a selected node is back inside the band.
    let cfg = *ring.cfg();
    for &id in ring.active() {
        let node = ring.get(id).unwrap();
        for adjacent in [node.left, node.right] {
            let length = link_length(&ring, id, adjacent);
            assert!(length >= cfg.min_link_length() && length <= cfg.max_link_length());
        }
    }
}

#[test]
fn compressing_drag_removes_crowded_neighbors() {
    let mut ring = six_by_two();
    ring.activate_closest(Vector2::new(0.0, 24.0));

    // Pushing the selection left crowds n1 and n10 (links drop to 18 < 24)
    // while the trailing links stretch to 78 > 72 and split.
    ring.apply_drag(Vector2::new(-30.0, 24.0), Vector2::new(-30.0, 0.0), None, None);

    assert!(ring.get(NodeId(1)).is_none());
    assert!(ring.get(NodeId(10)).is_none());
    assert_eq!(ring.len(), 12);
    assert_eq!(ring.total_created(), 14);
    assert_eq!(walk_right(&ring).len(), 12);
    assert_eq!(ring.active(), &[NodeId(2), NodeId(3), NodeId(8), NodeId(9)]);
    assert_eq!(ring.get(NodeId(12)).unwrap().position, Vector2::new(33.0, 24.0));
    assert_eq!(ring.get(NodeId(13)).unwrap().position, Vector2::new(33.0, -24.0));
}

#[test]
fn split_increases_count_by_one_and_keeps_closure() {
    let mut ring = Ring::build_rectangle(RingCfg::default(), Vector2::zeros(), 4, 4);
    let n = ring.len();
    let right = ring.get(NodeId(0)).unwrap().right;
    let a = ring.get(NodeId(0)).unwrap().position;
    let b = ring.get(right).unwrap().position;

    let new = ring.split_link(NodeId(0), right);

    assert_eq!(ring.len(), n + 1);
    assert_eq!(walk_right(&ring).len(), n + 1);
    let mid = ring.get(new).unwrap();
    assert_eq!(mid.state, NodeState::Inactive);
    let expected = (a + (b - a) / 2.0).map(f64::round);
    assert!((mid.position - expected).norm() < 1e-12);
    assert_eq!(mid.left, NodeId(0));
    assert_eq!(mid.right, right);

    // Splitting the other orientation (towards `left`) works the same way.
    let left = ring.get(NodeId(0)).unwrap().left;
    ring.split_link(NodeId(0), left);
    assert_eq!(ring.len(), n + 2);
    assert_eq!(walk_right(&ring).len(), n + 2);
}

#[test]
#[should_panic(expected = "not ring-adjacent")]
fn split_rejects_non_adjacent_endpoints() {
    let mut ring = Ring::build_rectangle(RingCfg::default(), Vector2::zeros(), 4, 4);
    let _ = ring.split_link(NodeId(0), NodeId(5));
}

#[test]
fn removal_from_a_triangle_is_refused() {
    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(50.0, 80.0),
    ];
    let mut ring = Ring::build_polygon(RingCfg::default(), &points);

    ring.remove_node(NodeId(1));

    assert_eq!(ring.len(), 3);
    assert!(ring.get(NodeId(1)).is_some());
    assert!(ring.links_consistent());
}

#[test]
fn removal_drops_the_node_from_the_selection() {
    let points = [
        Vector2::new(100.0, 0.0),
        Vector2::new(31.0, 95.0),
        Vector2::new(-81.0, 59.0),
        Vector2::new(-81.0, -59.0),
        Vector2::new(31.0, -95.0),
    ];
    let mut ring = Ring::build_polygon(RingCfg::default(), &points);
    ring.activate_closest(Vector2::new(90.0, 0.0));
    let victim = ring.active()[0];

    ring.remove_node(victim);

    assert!(ring.get(victim).is_none());
    assert!(!ring.active().contains(&victim));
    assert_eq!(ring.len(), 4);
    assert!(ring.links_consistent());
}

#[test]
fn angle_helpers_cover_the_principal_range() {
    use super::drag::{signed_angle, wrap_angle};
    let quarter = std::f64::consts::FRAC_PI_2;
    assert!((signed_angle(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)) - quarter).abs() < 1e-12);
    assert!((signed_angle(Vector2::new(1.0, 0.0), Vector2::new(0.0, -1.0)) + quarter).abs() < 1e-12);
    assert!((wrap_angle(3.0 * std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-12);
    assert!((wrap_angle(-3.0 * std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-12);
    assert!((wrap_angle(0.25) - 0.25).abs() < 1e-12);
}

#[test]
fn randomized_sessions_keep_ring_invariants() {
    let mut ring = Ring::build_rectangle(RingCfg::default(), Vector2::zeros(), 10, 5);
    for index in 0..4u64 {
        let path = draw_drag_path(
            DragPathCfg {
                steps: 80,
                step_length: 9.0,
                max_turn: 0.6,
                initial_heading: index as f64,
            },
            ReplayToken { seed: 42, index },
        );
        let mut tracker = MotionTracker::default();
        let mut pick = Vector2::new(12.0 * index as f64 - 18.0, 6.0);
        ring.activate_closest(pick);
        for delta in path {
            pick += delta;
            tracker.record(delta);
            ring.apply_drag(pick, delta, tracker.direction_now(), tracker.direction_old());
            assert!(ring.len() >= 3);
            assert!(ring.links_consistent());
            assert!(ring.active().iter().all(|&id| ring.get(id).is_some()));
        }
        ring.deactivate_all();
        tracker.clear();
        assert_eq!(walk_right(&ring).len(), ring.len());
    }
}
