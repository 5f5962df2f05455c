// The seam between the rasterizer and the platform. The rasterizer only
// ever reads and writes single pixels through this trait, so it works the
// same against a real window and against a plain in-memory buffer.

use crate::error::Error;
use crate::types::{Color, FrameBuffer};

pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Current color at (x, y).
    fn pixel(&self, x: usize, y: usize) -> Result<Color, Error>;

    /// Overwrite the color at (x, y).
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), Error>;

    /// Flush pending writes to wherever this surface is visible.
    fn present(&mut self) -> Result<(), Error>;

    /// Non-blocking check for a user-initiated close request.
    fn poll_quit(&mut self) -> bool;
}

/// A windowless surface: just a framebuffer behind the trait. Nothing to
/// present to and nobody to request a quit, so those are trivial. Useful
/// headless and as the test double for the rasterizer.
pub struct BufferSurface {
    frame: FrameBuffer,
}

impl BufferSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: FrameBuffer::new(width, height),
        }
    }
}

impl Surface for BufferSurface {
    fn width(&self) -> usize {
        self.frame.width
    }

    fn height(&self) -> usize {
        self.frame.height
    }

    fn pixel(&self, x: usize, y: usize) -> Result<Color, Error> {
        check_bounds(&self.frame, x, y)?;
        Ok(Color::from_u32(self.frame.pixels[self.frame.index(x, y)]))
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), Error> {
        check_bounds(&self.frame, x, y)?;
        let idx = self.frame.index(x, y);
        self.frame.pixels[idx] = color.to_u32();
        Ok(())
    }

    fn present(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        false
    }
}

/// Shared bounds check for framebuffer-backed surfaces.
pub(crate) fn check_bounds(frame: &FrameBuffer, x: usize, y: usize) -> Result<(), Error> {
    if x >= frame.width || y >= frame.height {
        return Err(Error::OutOfBounds {
            x,
            y,
            width: frame.width,
            height: frame.height,
        });
    }
    Ok(())
}
