//! Ring geometry derived from the host view size.
//!
//! All of the widget's dimensions follow from two numbers: the ring radius
//! (half of `min(width * 3/4, height)`, so the ring always fits the view with
//! room to spare horizontally) and the stroke width (radius / 40). Everything
//! else - marker size, gear radius and depth, tooth count, the width budget
//! for the time text - is derived here so the drawing code never repeats the
//! arithmetic.
//!
//! # Angular Convention
//!
//! Positions around the ring are given in turns: `n` in `[0, 1)` maps to
//! `center + (radius * cos(2*pi*n), radius * sin(2*pi*n))` in screen
//! coordinates. With y growing downward this puts `n = 0` at 3 o'clock and
//! makes `n` increase clockwise. Inputs above 1 wrap by subtracting 1.
//!
//! The progress arc itself is drawn with embedded-graphics angles; this
//! module's convention covers the marker dot and the gear teeth.

use embedded_graphics::geometry::Point;

/// Share of the view width the ring diameter may occupy.
const WIDTH_SHARE: f32 = 0.75;

/// Ring radius to stroke width ratio.
const STROKE_DIVISOR: f32 = 40.0;

/// Marker dot radius, in stroke widths.
const MARKER_RADIUS_STROKES: f32 = 2.0;

/// Angular offset of the marker dot behind the arc's start, in turns.
/// Places the dot exactly on the arc's leading edge.
const MARKER_LAG_TURNS: f32 = 0.25;

/// Gap between the ring and the gear circle, in stroke widths.
const GEAR_INSET_STROKES: f32 = 2.0;

/// Radial length of a gear tooth, in stroke widths.
const GEAR_DEPTH_STROKES: f32 = 3.0;

/// One gear tooth per this many pixels of gear radius.
const TOOTH_PITCH: f32 = 4.0;

/// Dimensions of the countdown ring for one host view size.
///
/// Built by [`RingGeometry::measure`] whenever the host size changes, read by
/// the drawing code every frame.
#[derive(Clone, Copy, Debug)]
pub struct RingGeometry {
    width: f32,
    height: f32,
    radius: f32,
    stroke_width: f32,
}

impl RingGeometry {
    /// Measure the ring against a host view size.
    pub fn measure(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        let radius = (w * WIDTH_SHARE).min(h) / 2.0;
        let stroke_width = radius / STROKE_DIVISOR;
        Self {
            width: w,
            height: h,
            radius,
            stroke_width,
        }
    }

    /// View center, where the ring and the time text are anchored.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2.0) as i32, (self.height / 2.0) as i32)
    }

    /// Ring diameter rounded to whole pixels.
    pub fn ring_diameter(&self) -> u32 { (self.radius * 2.0).round() as u32 }

    /// Arc stroke width rounded to whole pixels, at least 1.
    pub fn stroke_px(&self) -> u32 { (self.stroke_width.round() as u32).max(1) }

    /// Marker dot diameter (radius of two stroke widths), at least 2 px.
    pub fn marker_diameter(&self) -> u32 {
        ((MARKER_RADIUS_STROKES * self.stroke_width * 2.0).round() as u32).max(2)
    }

    /// Center of the marker dot for a progress fraction.
    ///
    /// The dot trails the arc's start by a quarter turn, which lands it on
    /// the arc's leading edge in this module's angular convention.
    pub fn marker_position(&self, fraction: f32) -> Point {
        self.ring_point(fraction - MARKER_LAG_TURNS, self.radius)
    }

    /// Radius of the decorative gear circle, inset from the ring.
    pub fn gear_radius(&self) -> f32 { self.radius - GEAR_INSET_STROKES * self.stroke_width }

    /// Radial length of one gear tooth.
    pub fn gear_depth(&self) -> f32 { GEAR_DEPTH_STROKES * self.stroke_width }

    /// Number of gear teeth around the gear circle.
    pub fn tooth_count(&self) -> u32 { (self.gear_radius() / TOOTH_PITCH) as u32 }

    /// Gear tooth stroke width in pixels, at least 1.
    pub fn tooth_stroke_px(&self) -> u32 { ((self.stroke_width / 2.0).round() as u32).max(1) }

    /// Horizontal width available to the time text inside the gear circle.
    pub fn text_width_budget(&self) -> f32 {
        (self.gear_radius() - 2.0 * self.gear_depth()) * 2.0
    }

    /// Point on a circle of `radius` around the view center at `turns`.
    ///
    /// Wraps `turns > 1` by subtracting one full turn.
    pub fn ring_point(&self, turns: f32, radius: f32) -> Point {
        let turns = if turns > 1.0 { turns - 1.0 } else { turns };
        let angle = core::f32::consts::TAU * turns;
        let x = self.width / 2.0 + radius * angle.cos();
        let y = self.height / 2.0 + radius * angle.sin();
        Point::new(x.round() as i32, y.round() as i32)
    }
}
