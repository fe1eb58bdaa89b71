//! Text styles and the digit font ladder.
//!
//! The time readout scales with the ring: the drawing code asks
//! [`fit_time_font`] for the largest ladder entry whose rendered width fits
//! the space inside the gear circle. Bitmap mono fonts come in fixed sizes,
//! so the fit walks a discrete ladder from largest to smallest instead of
//! shrinking a vector font point by point; the smallest entry is the floor
//! returned when nothing fits.
//!
//! Alignment styles are `const` - `TextStyleBuilder` is const-constructible
//! in embedded-graphics 0.8, so the style lives in read-only data instead of
//! being rebuilt every frame.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

/// Centered text anchored at its middle, for the time readout: the anchor
/// point is the ring center, horizontally and vertically.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Digit font candidates, largest first. The last entry is the floor.
pub const TIME_FONT_LADDER: [&MonoFont<'static>; 7] = [
    &PROFONT_24_POINT,
    &PROFONT_18_POINT,
    &PROFONT_14_POINT,
    &PROFONT_12_POINT,
    &PROFONT_10_POINT,
    &PROFONT_9_POINT,
    &PROFONT_7_POINT,
];

/// Rendered width of `char_count` characters in a mono font.
pub fn text_pixel_width(font: &MonoFont<'_>, char_count: u32) -> u32 {
    if char_count == 0 {
        return 0;
    }
    char_count * font.character_size.width + (char_count - 1) * font.character_spacing
}

/// Largest ladder font whose rendered width fits `avail_width`.
///
/// Falls through to the smallest entry when even that one does not fit, so
/// the readout shrinks but never disappears.
pub fn fit_time_font(char_count: u32, avail_width: f32) -> &'static MonoFont<'static> {
    for font in TIME_FONT_LADDER {
        if text_pixel_width(font, char_count) as f32 <= avail_width {
            return font;
        }
    }
    TIME_FONT_LADDER[TIME_FONT_LADDER.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ladder fonts all differ in glyph size, so character_size identifies
    // the selected entry.

    #[test]
    fn test_fit_picks_largest_when_room() {
        let font = fit_time_font(5, 10_000.0);
        assert_eq!(
            font.character_size,
            PROFONT_24_POINT.character_size,
            "Unbounded width should select the top of the ladder"
        );
    }

    #[test]
    fn test_fit_floors_at_smallest() {
        let font = fit_time_font(5, 1.0);
        assert_eq!(
            font.character_size,
            PROFONT_7_POINT.character_size,
            "Impossible width should fall through to the floor font"
        );
    }

    #[test]
    fn test_fit_never_leaves_ladder() {
        for width in [0.0, 20.0, 50.0, 80.0, 120.0, 200.0, 500.0] {
            let font = fit_time_font(5, width);
            assert!(
                TIME_FONT_LADDER
                    .iter()
                    .any(|entry| entry.character_size == font.character_size),
                "Fit result must always be a ladder entry (width {width})"
            );
        }
    }

    #[test]
    fn test_fit_result_fits_or_is_floor() {
        for width in [30.0, 60.0, 90.0, 150.0] {
            let font = fit_time_font(5, width);
            let fits = text_pixel_width(font, 5) as f32 <= width;
            assert!(
                fits || font.character_size == PROFONT_7_POINT.character_size,
                "A selected font either fits the budget or is the floor"
            );
        }
    }

    #[test]
    fn test_fit_is_monotonic_in_width() {
        let mut prev_width = 0;
        for budget in [10.0, 40.0, 70.0, 100.0, 200.0] {
            let width = text_pixel_width(fit_time_font(5, budget), 5);
            assert!(
                width >= prev_width,
                "A larger budget never selects a smaller font"
            );
            prev_width = width;
        }
    }

    #[test]
    fn test_text_pixel_width_empty() {
        assert_eq!(text_pixel_width(TIME_FONT_LADDER[0], 0), 0);
    }
}
