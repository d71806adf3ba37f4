//! Layer stacking and scene aggregation.
//!
//! Layers are stacked in order: each visible layer sits on top of the
//! combined height of the visible layers before it. Wall layers become
//! per-wall meshes plus fixture placements; floor layers become one slab per
//! closed wall loop. Every layer reads only its own collections.

use tracing::{debug, warn};

use crate::operations::slab::{extract_loops, SlabLoop};
use crate::operations::wall::{place_fixtures, FixturePlacement, WallFootprint, WallMesh};
use crate::operations::KernelParams;
use crate::plan::{Layer, LayerKind, WallId};
use crate::tessellation::{TessellateSlab, TriangleMesh};

/// A visible layer with the elevation of its base.
#[derive(Debug, Clone, Copy)]
pub struct StackedLayer<'a> {
    /// Index of the layer in the input slice.
    pub index: usize,
    pub layer: &'a Layer,
    pub elevation: f64,
}

/// Stacks the visible layers, assigning each the running sum of the heights
/// of the visible layers below it.
#[must_use]
pub fn stack_layers(layers: &[Layer]) -> Vec<StackedLayer<'_>> {
    let mut elevation = 0.0;
    layers
        .iter()
        .enumerate()
        .filter(|(_, l)| l.visible)
        .map(|(index, layer)| {
            let stacked = StackedLayer {
                index,
                layer,
                elevation,
            };
            elevation += layer.height;
            stacked
        })
        .collect()
}

/// Render data for one wall.
#[derive(Debug, Clone)]
pub struct WallGeometry {
    pub wall: WallId,
    pub footprint: WallFootprint,
    pub mesh: TriangleMesh,
    pub fixtures: Vec<FixturePlacement>,
}

/// Render data for one floor slab.
#[derive(Debug, Clone)]
pub struct SlabGeometry {
    pub outline: SlabLoop,
    pub mesh: TriangleMesh,
}

/// Render data for one stacked layer.
#[derive(Debug, Clone)]
pub struct LayerGeometry {
    /// Index of the layer in the input slice.
    pub index: usize,
    pub name: String,
    pub kind: LayerKind,
    pub elevation: f64,
    pub walls: Vec<WallGeometry>,
    pub slabs: Vec<SlabGeometry>,
}

impl LayerGeometry {
    /// All wall and slab meshes of the layer concatenated into one.
    #[must_use]
    pub fn merged_mesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        for wall in &self.walls {
            mesh.append(&wall.mesh);
        }
        for slab in &self.slabs {
            mesh.append(&slab.mesh);
        }
        mesh
    }
}

/// Geometry of every visible layer, bottom to top.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub layers: Vec<LayerGeometry>,
}

impl Scene {
    /// Door and window placements across all layers.
    pub fn fixtures(&self) -> impl Iterator<Item = &FixturePlacement> {
        self.layers
            .iter()
            .flat_map(|l| l.walls.iter())
            .flat_map(|w| w.fixtures.iter())
    }

    /// Total triangle count across all layers.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| {
                l.walls
                    .iter()
                    .map(|w| w.mesh.indices.len())
                    .chain(l.slabs.iter().map(|s| s.mesh.indices.len()))
            })
            .sum()
    }
}

/// Builds the geometry of every visible layer.
#[must_use]
pub fn build_scene(layers: &[Layer], params: &KernelParams) -> Scene {
    Scene {
        layers: stack_layers(layers)
            .into_iter()
            .map(|stacked| build_layer(stacked, params))
            .collect(),
    }
}

/// Builds the geometry of one layer at its stacked elevation.
#[must_use]
pub fn build_layer(stacked: StackedLayer<'_>, params: &KernelParams) -> LayerGeometry {
    let StackedLayer {
        index,
        layer,
        elevation,
    } = stacked;
    let mut geometry = LayerGeometry {
        index,
        name: layer.name.clone(),
        kind: layer.kind,
        elevation,
        walls: Vec::new(),
        slabs: Vec::new(),
    };

    match layer.kind {
        LayerKind::Wall => {
            for wall in layer.walls.keys() {
                let Some(footprint) = WallFootprint::build(layer, wall, params) else {
                    continue;
                };
                let Some(mesh) = WallMesh::new(wall, layer.height, elevation)
                    .execute_with_footprint(layer, &footprint, params)
                else {
                    continue;
                };
                geometry.walls.push(WallGeometry {
                    wall,
                    footprint,
                    mesh,
                    fixtures: place_fixtures(layer, wall, elevation, params),
                });
            }
        }
        LayerKind::Floor => {
            for outline in extract_loops(layer) {
                match TessellateSlab::new(&outline.points, elevation, layer.height).execute() {
                    Ok(mesh) => geometry.slabs.push(SlabGeometry { outline, mesh }),
                    Err(err) => warn!(layer = %layer.name, %err, "skipping slab"),
                }
            }
        }
    }

    debug!(
        layer = %layer.name,
        elevation,
        walls = geometry.walls.len(),
        slabs = geometry.slabs.len(),
        "built layer geometry"
    );
    geometry
}
