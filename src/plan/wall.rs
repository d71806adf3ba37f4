use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a wall within its layer.
    pub struct WallId;
}

/// A thick straight wall between two nodes of the same layer.
///
/// Walls are undirected for topology, but `start -> end` fixes which side
/// is "left" for offset math.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub start: NodeId,
    pub end: NodeId,
    /// Full wall thickness; the centerline sits halfway.
    pub thickness: f64,
    /// Railing attributes used when the wall bounds a floor slab.
    pub slab_edge: SlabEdge,
}

impl Wall {
    /// Creates a wall with no slab-edge attributes.
    #[must_use]
    pub fn new(start: NodeId, end: NodeId, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            slab_edge: SlabEdge::default(),
        }
    }

    /// Returns `true` if `node` is one of this wall's endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }

    /// Returns the endpoint opposite `node`.
    ///
    /// Assumes `node` is an endpoint; for any other node the start is returned.
    #[must_use]
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }
}

/// Railing and gate state of a slab edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlabEdge {
    pub has_railing: bool,
    pub has_gate: bool,
    pub gate_open: bool,
}

impl SlabEdge {
    /// Adds or removes the railing. A gate cannot outlive its railing.
    pub fn set_railing(&mut self, has_railing: bool) {
        self.has_railing = has_railing;
        if !has_railing {
            self.has_gate = false;
        }
        self.gate_open = false;
    }

    /// Adds or removes a gate; the gate always starts closed.
    pub fn set_gate(&mut self, has_gate: bool) {
        self.has_gate = has_gate;
        self.gate_open = false;
    }

    /// Opens or closes the gate. No-op without a gate.
    pub fn toggle_gate(&mut self) {
        if self.has_gate {
            self.gate_open = !self.gate_open;
        }
    }
}
