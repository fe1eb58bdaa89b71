//! Color constants and the default ring palette.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Standard colors come from the `RgbColor` trait constants; custom colors
//! are constructed from raw components.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Frame background behind the ring.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default time readout color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Muted slate for the ring track, marker dot, and gear teeth.
/// RGB565: (10, 24, 14) - roughly 35% brightness, slightly blue.
pub const SLATE: Rgb565 = Rgb565::new(10, 24, 14);

/// Amber for the progress arc.
/// RGB565: (31, 44, 0) - between orange and yellow.
pub const AMBER: Rgb565 = Rgb565::new(31, 44, 0);

// =============================================================================
// Ring Palette
// =============================================================================

/// The widget's three configurable colors, fixed before the render loop runs.
///
/// `Default` supplies the built-in theme; a host can override individual
/// fields when constructing the palette.
#[derive(Clone, Copy, Debug)]
pub struct RingPalette {
    /// Ring track, marker dot, and gear teeth.
    pub ring_background: Rgb565,

    /// Progress arc.
    pub progress: Rgb565,

    /// Time readout.
    pub text: Rgb565,
}

impl Default for RingPalette {
    fn default() -> Self {
        Self {
            ring_background: SLATE,
            progress: AMBER,
            text: WHITE,
        }
    }
}
