use std::collections::VecDeque;

use tracing::debug;

use crate::math::Point2;
use crate::plan::{Layer, NodeId, WallId};

/// A closed chain of walls traced from a layer's wall graph.
///
/// `nodes` lists each corner once; the closing edge back to `nodes[0]` is
/// implied.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabLoop {
    pub nodes: Vec<NodeId>,
    pub walls: Vec<WallId>,
    pub points: Vec<Point2>,
}

/// Traces the layer's walls into closed loops.
///
/// Walls are consumed from a pool in arena order. Each chain starts from the
/// next unused wall and greedily follows the first pooled wall touching its
/// tail until none does. The chain is kept only if its tail returned to its
/// start node; open chains are discarded. Loops touching a missing node are
/// discarded as well.
///
/// At a node with three or more walls the first matching wall wins, so
/// branching graphs may yield fewer loops than they enclose.
#[must_use]
pub fn extract_loops(layer: &Layer) -> Vec<SlabLoop> {
    let mut pool: VecDeque<(WallId, NodeId, NodeId)> = layer
        .walls
        .iter()
        .map(|(id, w)| (id, w.start, w.end))
        .collect();
    let mut loops = Vec::new();

    while let Some((first, chain_start, first_end)) = pool.pop_front() {
        let mut nodes = vec![chain_start, first_end];
        let mut walls = vec![first];
        let mut tail = first_end;

        while let Some(idx) = pool.iter().position(|&(_, a, b)| a == tail || b == tail) {
            let Some((wall, a, b)) = pool.remove(idx) else {
                break;
            };
            tail = if a == tail { b } else { a };
            walls.push(wall);
            nodes.push(tail);
        }

        if tail != chain_start {
            debug!(walls = walls.len(), "discarding open wall chain");
            continue;
        }
        nodes.pop();

        let points: Option<Vec<Point2>> = nodes
            .iter()
            .map(|&n| layer.nodes.get(n).map(|node| node.position))
            .collect();
        let Some(points) = points else {
            debug!(walls = walls.len(), "discarding loop with a missing node");
            continue;
        };

        loops.push(SlabLoop {
            nodes,
            walls,
            points,
        });
    }

    loops
}
