//! Activation selection: bounded k-nearest insertion plus one-node gap fill.

use nalgebra::Vector2;

use super::types::{NodeId, NodeState, Ring};

impl Ring {
    /// Select up to `activation_count` live nodes nearest `pick` by squared
    /// distance, then promote any inactive node flanked by two selected
    /// neighbors. Any prior selection is cleared first.
    ///
    /// The candidate list is an online bounded insertion: each node is
    /// inserted before the first strictly-farther entry, the tail is
    /// evicted on overflow, and a node farther than every entry of a full
    /// list is discarded. Rank and distance share one sorted vector.
    pub fn activate_closest(&mut self, pick: Vector2<f64>) {
        self.deactivate_all();

        let bound = self.cfg.activation_count;
        let mut ranked: Vec<(f64, NodeId)> = Vec::with_capacity(bound + 1);
        for (id, node) in self.iter() {
            let d2 = (pick - node.position).norm_squared();
            let slot = ranked
                .iter()
                .position(|&(other, _)| d2 < other)
                .unwrap_or(ranked.len());
            if slot < bound {
                ranked.insert(slot, (d2, id));
                ranked.truncate(bound);
            }
        }
        self.active = ranked.into_iter().map(|(_, id)| id).collect();

        // Gap fill: a lone unselected node between two selected ones would
        // tear away from the drag region, so it joins regardless of distance.
        let fills: Vec<NodeId> = self
            .iter()
            .filter(|&(id, node)| {
                !self.is_active(id) && self.is_active(node.left) && self.is_active(node.right)
            })
            .map(|(id, _)| id)
            .collect();
        self.active.extend(fills);

        for i in 0..self.active.len() {
            let id = self.active[i];
            self.node_mut(id).state = NodeState::Active;
        }
    }

    /// Reset every active node to inactive and clear the selection.
    /// Safe on an empty selection; calling twice equals calling once.
    pub fn deactivate_all(&mut self) {
        let selected = std::mem::take(&mut self.active);
        for id in selected {
            self.node_mut(id).state = NodeState::Inactive;
        }
    }
}
