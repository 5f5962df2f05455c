// What you SEE:
// • An 800x800 window with three overlapping filled circles (red, green,
//   blue) whose overlaps mix additively: red+green reads yellow, all three
//   together read white.
// • The picture is static; the window stays up until you close it or hold
//   ESC.

use circle_raster::error::Error;
use circle_raster::raster::Rasterizer;
use circle_raster::surface::Surface;
use circle_raster::types::{Blend, Color};
use circle_raster::vector::Vector3;
use circle_raster::window::WindowSurface;
use log::info;

const WIDTH: usize = 800;
const HEIGHT: usize = 800;
const RADIUS: f32 = 200.0;

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut surface = WindowSurface::new("Rendered Circles", WIDTH, HEIGHT)?;
    info!("opened {WIDTH}x{HEIGHT} window");

    // One circle per primary, arranged so all three pairwise overlaps (and
    // the triple overlap) are on screen.
    let w = WIDTH as f32;
    let h = HEIGHT as f32;
    let circles = [
        (Vector3::xy(w / 3.0, h / 3.0 * 2.0), Color::RED),
        (Vector3::xy(w / 3.0 * 2.0, h / 3.0 * 2.0), Color::GREEN),
        (Vector3::xy(w / 2.0, h / 3.0), Color::BLUE),
    ];

    let raster = Rasterizer::new(Blend::Saturating);
    for (center, color) in circles {
        raster.stamp_circle(&mut surface, center, RADIUS, color)?;
        info!("stamped radius-{RADIUS} circle at ({}, {})", center.x, center.y);
    }

    // Keep presenting until the user closes the window; presenting is also
    // what pumps minifb's event queue.
    while !surface.poll_quit() {
        surface.present()?;
    }
    info!("quit requested, shutting down");

    Ok(())
}
