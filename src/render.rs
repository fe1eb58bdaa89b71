//! Redraw bookkeeping for the frame loop.
//!
//! The countdown only changes once per second, so repainting at frame rate
//! would redraw an identical ring ~50 times per tick. The frame loop instead
//! repaints when the counter raised its redraw flag (tick, restart) or on the
//! first frame, and just pushes the unchanged framebuffer otherwise.

/// Tracks whether the current frame needs to repaint the widget.
pub struct RenderState {
    /// First frame always paints, before any tick has raised the flag.
    first_frame: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self { first_frame: true }
    }

    /// Whether this frame should repaint, given the consumed redraw flag.
    pub fn should_redraw(&mut self, redraw_requested: bool) -> bool {
        let redraw = self.first_frame || redraw_requested;
        self.first_frame = false;
        redraw
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_always_redraws() {
        let mut rs = RenderState::new();
        assert!(rs.should_redraw(false), "First frame paints unconditionally");
    }

    #[test]
    fn test_idle_frames_skip_redraw() {
        let mut rs = RenderState::new();
        rs.should_redraw(false);
        assert!(!rs.should_redraw(false), "No request, nothing to paint");
        assert!(!rs.should_redraw(false));
    }

    #[test]
    fn test_request_triggers_redraw() {
        let mut rs = RenderState::new();
        rs.should_redraw(false);
        assert!(rs.should_redraw(true), "A raised flag paints the frame");
        assert!(!rs.should_redraw(false), "The request does not linger");
    }
}
