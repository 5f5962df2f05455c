// Filled-circle rasterization onto a pixel surface: Vector3 carries the
// distance math, Rasterizer runs the per-pixel scan and additive composite,
// and the Surface trait is the seam the window glue plugs into.

pub mod error;
pub mod raster;
pub mod surface;
pub mod types;
pub mod vector;
pub mod window;
