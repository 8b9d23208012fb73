//! Remeshing: split over-stretched links, remove over-compressed neighbors.

use super::types::{NodeId, Ring};

impl Ring {
    /// One pass over the current selection. For each active node the two
    /// neighbors are captured once, then each captured link is checked:
    /// longer than the maximum splits at the midpoint, shorter than the
    /// minimum removes the neighbor. Splits and removals touch only the
    /// link's endpoints; untouched nodes keep their activation state.
    pub(crate) fn remesh_active(&mut self) {
        let snapshot = self.active.clone();
        for id in snapshot {
            // A node selected earlier in this pass may already have been
            // removed by a neighboring active node's compression check.
            if self.get(id).is_none() {
                continue;
            }
            let (left, right) = {
                let node = self.node(id);
                (node.left, node.right)
            };
            for adjacent in [left, right] {
                let link = self.node(id).position - self.node(adjacent).position;
                let length = link.norm();
                if length > self.cfg.max_link_length() {
                    self.split_link(id, adjacent);
                } else if length < self.cfg.min_link_length() {
                    self.remove_node(adjacent);
                }
            }
        }
    }

    /// Split the link between ring-adjacent `a` and `b`: a new inactive
    /// node at the (snapped) midpoint replaces the direct link with
    /// endpoint-new-endpoint. Returns the new node's id.
    ///
    /// Panics if `a` and `b` are not ring-adjacent.
    pub(crate) fn split_link(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let (a_left, a_right) = {
            let node = self.node(a);
            (node.left, node.right)
        };
        let midpoint = {
            let link = self.node(a).position - self.node(b).position;
            self.node(b).position + link / 2.0
        };
        if a_left == b {
            let id = self.insert_node(midpoint, b, a);
            self.node_mut(a).left = id;
            self.node_mut(b).right = id;
            debug_assert!(self.links_consistent());
            id
        } else if a_right == b {
            let id = self.insert_node(midpoint, a, b);
            self.node_mut(a).right = id;
            self.node_mut(b).left = id;
            debug_assert!(self.links_consistent());
            id
        } else {
            panic!("split endpoints {a:?} and {b:?} are not ring-adjacent");
        }
    }

    /// Splice `id` out of the ring and tombstone its slot. Refused as a
    /// no-op when the ring is already a triangle, detected by the node's
    /// two neighbors being adjacent to each other.
    pub(crate) fn remove_node(&mut self, id: NodeId) {
        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };
        if self.node(left).left == right {
            return;
        }
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
        self.nodes[id.0] = None;
        self.live -= 1;
        // Keep the selection a subset of the live set.
        self.active.retain(|&a| a != id);
        debug_assert!(self.links_consistent());
    }
}
