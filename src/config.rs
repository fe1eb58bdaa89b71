//! Application configuration constants.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulator display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Simulator display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Countdown tick period. One tick removes one second from the counter.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Slice the ticker sleeps in while waiting out a tick period.
/// Short slices keep cancellation (stop/restart) from blocking on up to a
/// full second of remaining sleep.
pub const TICK_CANCEL_POLL: Duration = Duration::from_millis(25);

// =============================================================================
// Countdown Configuration
// =============================================================================

/// Duration the demo starts counting down from (30 minutes).
pub const DEFAULT_DURATION_SECS: u32 = 30 * 60;

/// Step applied by the Up/Down keys when adjusting the duration.
pub const DURATION_STEP_SECS: u32 = 60;
