// The real display surface: a minifb window over an owned framebuffer.
// minifb only pumps its event queue during an update call, so the wait loop
// in main keeps presenting; `poll_quit` just reads the state that pump left.

use crate::error::Error;
use crate::surface::{Surface, check_bounds};
use crate::types::{Color, FrameBuffer};
use minifb::{Key, Window, WindowOptions};

pub struct WindowSurface {
    window: Window,
    frame: FrameBuffer,
}

impl WindowSurface {
    /// Open a window of the given size with an all-black framebuffer.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Keep the wait loop from spinning flat out.
        window.set_target_fps(60);
        Ok(Self {
            window,
            frame: FrameBuffer::new(width, height),
        })
    }
}

impl Surface for WindowSurface {
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

    /// Push the framebuffer to the screen (and pump the event queue).
    fn present(&mut self) -> Result<(), Error> {
        self.window
            .update_with_buffer(&self.frame.pixels, self.frame.width, self.frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// True once the user closed the window or holds ESC.
    fn poll_quit(&mut self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }
}
