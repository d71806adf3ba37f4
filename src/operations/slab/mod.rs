mod loops;

pub use loops::{extract_loops, SlabLoop};
