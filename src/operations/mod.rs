pub mod slab;
pub mod wall;

/// Tunable constants shared by the wall and slab operations.
#[derive(Debug, Clone, Copy)]
pub struct KernelParams {
    /// Clearance required around an opening: it is cut only if
    /// `width + opening_margin <= wall_length`.
    pub opening_margin: f64,
    /// Offset lines whose direction cross product is below this are parallel.
    pub parallel_tolerance: f64,
    /// Segment boundaries closer than this to a wall end count as the end.
    pub cap_tolerance: f64,
    /// Added to the wall thickness to size door and window fixtures.
    pub fixture_depth_padding: f64,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            opening_margin: 0.2,
            parallel_tolerance: 1e-4,
            cap_tolerance: 0.001,
            fixture_depth_padding: 0.04,
        }
    }
}
