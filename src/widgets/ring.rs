//! The countdown ring: progress arc, marker dot, gear teeth, time readout.
//!
//! One frame paints, in order:
//!
//! 1. The full ring track in the background color.
//! 2. The progress arc over it, sweeping clockwise from 12 o'clock by
//!    `fraction * 360` degrees in the progress color.
//! 3. A filled marker dot in the background color on the arc's leading edge,
//!    notching the arc tip.
//! 4. The decorative gear teeth inside the ring.
//! 5. The remaining time, `MM:SS`, centered in the gear circle in the largest
//!    font that fits.
//!
//! The routine is a pure function of geometry, counter values, and palette -
//! no state, no side effects beyond drawing - so the frame loop can call it
//! whenever the redraw flag says the picture changed.

use embedded_graphics::geometry::Angle;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

use super::primitives::{draw_dot, draw_radial_tick};
use crate::colors::RingPalette;
use crate::countdown::{display_text, progress_fraction};
use crate::geometry::RingGeometry;
use crate::styles::{CENTERED_MIDDLE, fit_time_font};

/// Sweep of the full ring in degrees.
const FULL_TURN_DEG: f32 = 360.0;

/// Arc start angle: 12 o'clock. Embedded-graphics measures angles from
/// 3 o'clock, growing counterclockwise on screen.
const ARC_START_DEG: f32 = 90.0;

/// Paint the countdown ring for the current counter values.
pub fn draw_countdown_ring<D>(
    display: &mut D,
    geometry: &RingGeometry,
    remaining: u32,
    total: u32,
    palette: &RingPalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fraction = progress_fraction(remaining, total);

    draw_ring_track(display, geometry, palette);
    draw_progress_arc(display, geometry, fraction, palette);
    draw_dot(
        display,
        geometry.marker_position(fraction),
        geometry.marker_diameter(),
        palette.ring_background,
    );
    draw_gear_teeth(display, geometry, palette);
    draw_time_text(display, geometry, remaining, palette);
}

/// Full 360-degree ring track in the background color.
fn draw_ring_track<D>(display: &mut D, geometry: &RingGeometry, palette: &RingPalette)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(geometry.center(), geometry.ring_diameter())
        .into_styled(PrimitiveStyle::with_stroke(palette.ring_background, geometry.stroke_px()))
        .draw(display)
        .ok();
}

/// Progress arc from 12 o'clock, clockwise. Embedded-graphics angles grow
/// counterclockwise, hence the negative sweep.
fn draw_progress_arc<D>(display: &mut D, geometry: &RingGeometry, fraction: f32, palette: &RingPalette)
where
    D: DrawTarget<Color = Rgb565>,
{
    Arc::with_center(
        geometry.center(),
        geometry.ring_diameter(),
        Angle::from_degrees(ARC_START_DEG),
        Angle::from_degrees(-fraction * FULL_TURN_DEG),
    )
    .into_styled(PrimitiveStyle::with_stroke(palette.progress, geometry.stroke_px()))
    .draw(display)
    .ok();
}

/// Evenly spaced radial teeth around the gear circle.
fn draw_gear_teeth<D>(display: &mut D, geometry: &RingGeometry, palette: &RingPalette)
where
    D: DrawTarget<Color = Rgb565>,
{
    let count = geometry.tooth_count();
    let gear_radius = geometry.gear_radius();
    let depth = geometry.gear_depth();
    let stroke = geometry.tooth_stroke_px();
    for tooth in 0..count {
        let turns = tooth as f32 / count as f32;
        draw_radial_tick(display, geometry, turns, gear_radius, depth, stroke, palette.ring_background);
    }
}

/// Remaining time, `MM:SS`, centered in the largest font that fits between
/// the gear teeth.
fn draw_time_text<D>(display: &mut D, geometry: &RingGeometry, remaining: u32, palette: &RingPalette)
where
    D: DrawTarget<Color = Rgb565>,
{
    let time = display_text(remaining);
    let font = fit_time_font(time.len() as u32, geometry.text_width_budget());
    let style = MonoTextStyle::new(font, palette.text);
    Text::with_text_style(&time, geometry.center(), style, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
