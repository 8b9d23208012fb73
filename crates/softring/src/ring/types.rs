//! Node arena, identifiers, and engine configuration.
//!
//! - `NodeId`: stable arena index, assigned monotonically per ring.
//! - `Node`: one perimeter point with its two ring neighbors as indices.
//! - `RingCfg`: length scale and the derived link-length band.
//! - `Ring`: the engine itself; owns the arena and the active selection.

use nalgebra::Vector2;

/// Stable node identifier: index into the ring's append-only arena.
///
/// Ids are assigned in creation order by each `Ring` instance and never
/// reused after removal, so they double as the diagnostic identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Activation state of a perimeter node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeState {
    #[default]
    Inactive,
    Active,
}

/// One perimeter point.
///
/// Invariant (for every live node): `left` and `right` name live nodes and
/// `node(left).right == id == node(right).left`.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vector2<f64>,
    pub state: NodeState,
    pub left: NodeId,
    pub right: NodeId,
}

/// Engine configuration, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// Nominal inter-node spacing unit.
    pub length_scale: f64,
    /// Upper bound on the k-nearest activation pass.
    pub activation_count: usize,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            length_scale: 16.0,
            activation_count: 4,
        }
    }
}

impl RingCfg {
    /// Links shorter than this trigger neighbor removal.
    #[inline]
    pub fn min_link_length(&self) -> f64 {
        1.5 * self.length_scale
    }

    /// Links longer than this trigger a midpoint split.
    #[inline]
    pub fn max_link_length(&self) -> f64 {
        4.5 * self.length_scale
    }

    /// Nominal spacing for freshly built rings; midpoint of the band.
    #[inline]
    pub fn std_link_length(&self) -> f64 {
        0.5 * (self.min_link_length() + self.max_link_length())
    }
}

/// The ring engine: a closed loop of nodes plus the active selection.
///
/// The live node set always forms exactly one closed ring of size >= 3.
/// The active list is always a subset of the live set, ordered
/// closest-first for the k-nearest portion with gap-filled nodes appended.
#[derive(Clone, Debug)]
pub struct Ring {
    pub(crate) cfg: RingCfg,
    /// Arena; slot index == `NodeId`. Removal tombstones the slot.
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) live: usize,
    pub(crate) active: Vec<NodeId>,
}

impl Ring {
    pub(crate) fn with_cfg(cfg: RingCfg) -> Self {
        assert!(
            cfg.length_scale > 0.0,
            "length_scale must be positive, got {}",
            cfg.length_scale
        );
        assert!(cfg.activation_count > 0, "activation_count must be at least 1");
        Self {
            cfg,
            nodes: Vec::new(),
            live: 0,
            active: Vec::new(),
        }
    }

    /// Number of live perimeter nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn cfg(&self) -> &RingCfg {
        &self.cfg
    }

    /// Currently active nodes, closest-first (gap-filled nodes appended).
    #[inline]
    pub fn active(&self) -> &[NodeId] {
        &self.active
    }

    /// Total nodes ever created, live or not. With `len()` this yields the
    /// split/removal tallies: splits = created - initial, removals =
    /// created - live.
    #[inline]
    pub fn total_created(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Live nodes in arena order with their ids; the drawing enumeration
    /// (draw each node, and the link to its `right` neighbor).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i), node)))
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("stale NodeId: node was removed")
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("stale NodeId: node was removed")
    }

    /// Create a node with both neighbors known. The position is snapped to
    /// the integer grid before storage, prior to any link update.
    pub(crate) fn insert_node(
        &mut self,
        position: Vector2<f64>,
        left: NodeId,
        right: NodeId,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let position = Vector2::new(position.x.round(), position.y.round());
        self.nodes.push(Some(Node {
            position,
            state: NodeState::Inactive,
            left,
            right,
        }));
        self.live += 1;
        id
    }

    #[inline]
    pub(crate) fn is_active(&self, id: NodeId) -> bool {
        self.active.contains(&id)
    }

    /// Doubly-linked consistency: every live node's neighbors are live and
    /// point back at it.
    pub(crate) fn links_consistent(&self) -> bool {
        self.iter().all(|(id, node)| {
            self.get(node.left).is_some_and(|l| l.right == id)
                && self.get(node.right).is_some_and(|r| r.left == id)
        })
    }
}
