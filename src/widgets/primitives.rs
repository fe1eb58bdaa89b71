//! Low-level drawing primitives shared across the ring widget.
//!
//! Generic over `DrawTarget<Color = Rgb565>` so the widget renders the same
//! against the simulator window, a real panel driver, or the mock display
//! used in tests. Draw results are discarded with `.ok()`; every target we
//! render to reports drawing as infallible.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::geometry::RingGeometry;

/// Draw one radial tick: a line from `outer_radius` pointing inward by
/// `depth`, at the angular position `turns`.
pub fn draw_radial_tick<D>(
    display: &mut D,
    geometry: &RingGeometry,
    turns: f32,
    outer_radius: f32,
    depth: f32,
    stroke_px: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outer = geometry.ring_point(turns, outer_radius);
    let inner = geometry.ring_point(turns, outer_radius - depth);
    Line::new(outer, inner)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_px))
        .draw(display)
        .ok();
}

/// Draw a filled dot centered on `center`.
pub fn draw_dot<D>(display: &mut D, center: Point, diameter: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}
