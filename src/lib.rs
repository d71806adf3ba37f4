pub mod error;
pub mod math;
pub mod operations;
pub mod plan;
pub mod scene;
pub mod tessellation;

pub use error::{Result, StoreyError};
pub use operations::KernelParams;
pub use scene::{build_scene, Scene};
