mod corner;
mod fixture;
mod footprint;
mod mesh;
mod segments;

pub use corner::{resolve_corner, CornerOffsets};
pub use fixture::{place_fixtures, FixturePlacement};
pub use footprint::WallFootprint;
pub use mesh::WallMesh;
pub use segments::{applicable_openings, segment_wall, Segment, SegmentKind};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::plan::{Layer, LayerKind, NodeId, WallId};

    /// The 4 × 4 square room: n1(-2,-2) n2(2,-2) n3(2,2) n4(-2,2), walls
    /// n1-n2-n3-n4-n1.
    pub struct Square {
        pub layer: Layer,
        pub nodes: [NodeId; 4],
        pub walls: [WallId; 4],
    }

    #[allow(clippy::unwrap_used)]
    pub fn square(thickness: f64) -> Square {
        let mut layer = Layer::new("Ground Floor", LayerKind::Wall);
        let nodes = [
            layer.add_node(-2.0, -2.0),
            layer.add_node(2.0, -2.0),
            layer.add_node(2.0, 2.0),
            layer.add_node(-2.0, 2.0),
        ];
        let walls = [0, 1, 2, 3].map(|i| {
            layer
                .add_wall(nodes[i], nodes[(i + 1) % 4], thickness)
                .unwrap()
        });
        Square {
            layer,
            nodes,
            walls,
        }
    }

    /// A single free-standing wall from `(0, 0)` to `(length, 0)`.
    #[allow(clippy::unwrap_used)]
    pub fn straight(length: f64, thickness: f64) -> (Layer, WallId) {
        let mut layer = Layer::new("Ground Floor", LayerKind::Wall);
        let a = layer.add_node(0.0, 0.0);
        let b = layer.add_node(length, 0.0);
        let w = layer.add_wall(a, b, thickness).unwrap();
        (layer, w)
    }
}
