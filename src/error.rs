// Every variant states *where* things went wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Normalizing a zero-length vector has no defined direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    /// A pixel coordinate landed outside the surface. The rasterizer's scan
    /// is bounded by the surface dimensions, so this only fires on misuse.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),
}
