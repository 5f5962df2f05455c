// Brute-force circle rasterization: visit every pixel on the surface, keep
// the ones whose distance to the center is within the radius, and add the
// circle's color onto whatever is already there.

use crate::error::Error;
use crate::surface::Surface;
use crate::types::{Blend, Color};
use crate::vector::Vector3;

pub struct Rasterizer {
    blend: Blend,
}

impl Rasterizer {
    pub fn new(blend: Blend) -> Self {
        Self { blend }
    }

    /// Stamp one filled circle onto the surface and present the result.
    ///
    /// Scans the full width x height grid regardless of radius. Pixels
    /// inside the circle get `color` composited onto their current value per
    /// the blend policy; pixels outside are untouched. Overlapping stamps
    /// therefore mix additively (red over green reads yellow).
    pub fn stamp_circle<S: Surface>(
        &self,
        surface: &mut S,
        center: Vector3,
        radius: f32,
        color: Color,
    ) -> Result<(), Error> {
        for x in 0..surface.width() {
            for y in 0..surface.height() {
                let position = Vector3::xy(x as f32, y as f32);
                if (position - center).magnitude() <= radius {
                    let prev = surface.pixel(x, y)?;
                    surface.set_pixel(x, y, self.blend.apply(prev, color))?;
                }
            }
        }

        surface.present()
    }
}
