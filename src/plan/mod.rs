mod node;
mod opening;
mod wall;

pub use node::{Node, NodeId};
pub use opening::{Opening, OpeningId, OpeningKind};
pub use wall::{SlabEdge, Wall, WallId};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::math::{Point2, TOLERANCE};

/// What a layer's walls represent when stacked into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Walls are extruded to the layer height.
    Wall,
    /// Closed wall loops become slabs of the layer height.
    Floor,
}

impl LayerKind {
    /// Default vertical extent: wall height or slab thickness.
    #[must_use]
    pub fn default_height(self) -> f64 {
        match self {
            Self::Wall => 2.5,
            Self::Floor => 0.2,
        }
    }
}

/// One independent plan in the layer stack.
///
/// Owns its nodes, walls and openings exclusively. Walls and openings refer
/// to each other through arena keys, so the graph may contain cycles without
/// ownership cycles. The geometry operations only read a layer; every
/// mutation goes through the methods below or directly through the arenas.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
    /// Wall height (wall layers) or slab thickness (floor layers).
    pub height: f64,
    pub nodes: SlotMap<NodeId, Node>,
    pub walls: SlotMap<WallId, Wall>,
    pub openings: SlotMap<OpeningId, Opening>,
}

impl Layer {
    /// Creates an empty, visible layer with the kind's default height.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visible: true,
            height: kind.default_height(),
            nodes: SlotMap::with_key(),
            walls: SlotMap::with_key(),
            openings: SlotMap::with_key(),
        }
    }

    /// Sets the layer height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    // --- Node operations ---

    /// Inserts a node at `(x, y)` and returns its ID.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        self.nodes.insert(Node::new(x, y))
    }

    /// Returns the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the node is not in this layer.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("node").into())
    }

    /// Moves a node to a new plan position.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the node is not in this layer.
    pub fn move_node(&mut self, id: NodeId, position: Point2) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("node"))?;
        node.position = position;
        Ok(())
    }

    /// Removes a node together with every wall touching it and those walls'
    /// openings.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the node is not in this layer.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        let node = self
            .nodes
            .remove(id)
            .ok_or(PlanError::EntityNotFound("node"))?;
        let doomed: Vec<WallId> = self.incident_walls(id).collect();
        for wall in doomed {
            self.remove_wall(wall)?;
        }
        Ok(node)
    }

    // --- Wall operations ---

    /// Inserts a wall between two existing, distinct nodes.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if either node is missing, or
    /// `PlanError::InvalidInput` if the endpoints coincide or the thickness
    /// is not positive.
    pub fn add_wall(&mut self, start: NodeId, end: NodeId, thickness: f64) -> Result<WallId> {
        self.node(start)?;
        self.node(end)?;
        if start == end {
            return Err(
                PlanError::InvalidInput("wall endpoints must be distinct nodes".into()).into(),
            );
        }
        if thickness.is_nan() || thickness <= TOLERANCE {
            return Err(PlanError::InvalidInput(format!(
                "wall thickness must be positive, got {thickness}"
            ))
            .into());
        }
        Ok(self.walls.insert(Wall::new(start, end, thickness)))
    }

    /// Returns the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in this layer.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall").into())
    }

    /// Returns a mutable reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in this layer.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut Wall> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall").into())
    }

    /// Removes a wall and its openings.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in this layer.
    pub fn remove_wall(&mut self, id: WallId) -> Result<Wall> {
        let wall = self
            .walls
            .remove(id)
            .ok_or(PlanError::EntityNotFound("wall"))?;
        let before = self.openings.len();
        self.openings.retain(|_, o| o.wall != id);
        debug!(
            removed_openings = before - self.openings.len(),
            "removed wall"
        );
        Ok(wall)
    }

    /// Walls with `node` as an endpoint, in arena order.
    pub fn incident_walls(&self, node: NodeId) -> impl Iterator<Item = WallId> + '_ {
        self.walls
            .iter()
            .filter(move |(_, w)| w.touches(node))
            .map(|(id, _)| id)
    }

    /// Number of walls with `node` as an endpoint.
    #[must_use]
    pub fn valence(&self, node: NodeId) -> usize {
        self.incident_walls(node).count()
    }

    /// Resolves both endpoint positions of a wall.
    ///
    /// Returns `None` when the wall or either endpoint is missing.
    #[must_use]
    pub fn wall_endpoints(&self, id: WallId) -> Option<(Point2, Point2)> {
        let wall = self.walls.get(id)?;
        let start = self.nodes.get(wall.start)?;
        let end = self.nodes.get(wall.end)?;
        Some((start.position, end.position))
    }

    // --- Opening operations ---

    /// Inserts an opening on an existing wall.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is missing, or
    /// `PlanError::InvalidInput` if the width or height is not positive.
    pub fn add_opening(&mut self, opening: Opening) -> Result<OpeningId> {
        self.wall(opening.wall)?;
        if opening.width.is_nan()
            || opening.height.is_nan()
            || opening.width <= TOLERANCE
            || opening.height <= TOLERANCE
        {
            return Err(PlanError::InvalidInput(format!(
                "opening size must be positive, got {} x {}",
                opening.width, opening.height
            ))
            .into());
        }
        Ok(self.openings.insert(opening))
    }

    /// Returns the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the opening is not in this layer.
    pub fn opening(&self, id: OpeningId) -> Result<&Opening> {
        self.openings
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("opening").into())
    }

    /// Returns a mutable reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the opening is not in this layer.
    pub fn opening_mut(&mut self, id: OpeningId) -> Result<&mut Opening> {
        self.openings
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("opening").into())
    }

    /// Openings cut into `wall`, in arena order.
    pub fn wall_openings(&self, wall: WallId) -> impl Iterator<Item = (OpeningId, &Opening)> + '_ {
        self.openings.iter().filter(move |(_, o)| o.wall == wall)
    }
}
