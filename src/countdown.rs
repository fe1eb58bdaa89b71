//! Countdown state, the one-second ticker, and time formatting.
//!
//! The counter lives in a [`CountdownState`] shared between two threads: the
//! ticker decrements it once per second, the render loop reads it when
//! painting. Both sides go through atomics, so neither needs a lock and the
//! render loop can never observe a torn update. A redraw flag rides along in
//! the same struct and stands in for a platform invalidation request: the
//! ticker raises it, the frame loop consumes it.
//!
//! # Ticker Lifecycle
//!
//! ```text
//! Idle --set_duration--> Running --last tick--> Idle (expired)
//!   ^                       |
//!   +---------stop----------+
//! ```
//!
//! [`Countdown::set_duration`] cancels any previous ticker before spawning a
//! new one, and cancellation joins the ticker thread. At most one ticker is
//! ever alive, and a replaced ticker is fully gone before the counter is
//! reset, so an old thread can never decrement the new countdown. The ticker
//! runs down to zero on its own and exits; `stop` and drop cancel it early.
//!
//! The first tick fires immediately when the ticker is scheduled, then once
//! per [`TICK_PERIOD`]. The tick transition itself is [`CountdownState::tick`],
//! a plain method, so tests can drive a countdown deterministically without
//! threads or sleeps.

use core::fmt::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use heapless::String;

use crate::config::{DEFAULT_DURATION_SECS, TICK_CANCEL_POLL, TICK_PERIOD};

// =============================================================================
// Shared State
// =============================================================================

/// Counter state shared between the ticker thread and the render loop.
pub struct CountdownState {
    /// Duration the countdown started from.
    total: AtomicU32,

    /// Seconds left. Written only by the ticker (and by `reset`, which runs
    /// strictly after the previous ticker has been joined).
    remaining: AtomicU32,

    /// Invalidation request: raised by the ticker, consumed by the frame loop.
    redraw: AtomicBool,
}

/// Result of one tick transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The counter was decremented; keep ticking.
    Running,
    /// The counter had already reached zero; the ticker ends here.
    Expired,
}

impl CountdownState {
    const fn new(seconds: u32) -> Self {
        Self {
            total: AtomicU32::new(seconds),
            remaining: AtomicU32::new(seconds),
            redraw: AtomicBool::new(true),
        }
    }

    /// Restart the counter at `seconds` and request a repaint.
    ///
    /// Callers must ensure no ticker is running (see [`Countdown::set_duration`]).
    fn reset(&self, seconds: u32) {
        self.total.store(seconds, Ordering::Release);
        self.remaining.store(seconds, Ordering::Release);
        self.redraw.store(true, Ordering::Release);
    }

    /// Duration the countdown started from.
    pub fn total(&self) -> u32 { self.total.load(Ordering::Acquire) }

    /// Seconds left.
    pub fn remaining(&self) -> u32 { self.remaining.load(Ordering::Acquire) }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&self) -> bool { self.redraw.swap(false, Ordering::AcqRel) }

    /// Advance the countdown by one tick.
    ///
    /// Decrements the counter and requests a repaint while it is above zero.
    /// A tick that finds the counter at zero reports [`TickOutcome::Expired`]
    /// without touching it, which is what ends the ticker thread.
    pub fn tick(&self) -> TickOutcome {
        // Single-writer: only the ticker thread calls this, so the
        // load-then-store pair cannot race with another decrement.
        let remaining = self.remaining.load(Ordering::Acquire);
        if remaining == 0 {
            self.redraw.store(true, Ordering::Release);
            return TickOutcome::Expired;
        }
        self.remaining.store(remaining - 1, Ordering::Release);
        self.redraw.store(true, Ordering::Release);
        TickOutcome::Running
    }
}

/// Progress fraction `remaining / total`, clamped to `[0, 1]`.
///
/// A zero total reads as fully elapsed rather than dividing by zero, and a
/// counter that momentarily exceeds the total clamps to a full ring.
pub fn progress_fraction(remaining: u32, total: u32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (remaining as f32 / total as f32).clamp(0.0, 1.0)
}

// =============================================================================
// Ticker Thread
// =============================================================================

/// Handle to the running ticker thread.
struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(state: Arc<CountdownState>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || run_ticker(&state, &stop_flag));
        Self { stop, handle }
    }

    /// Signal the thread to stop and wait for it to exit.
    ///
    /// The wait is bounded by one cancel-poll slice, not a full tick period.
    fn cancel(self) {
        self.stop.store(true, Ordering::Release);
        self.handle.join().ok();
    }

    fn is_finished(&self) -> bool { self.handle.is_finished() }
}

/// Ticker thread body: tick immediately, then once per period until the
/// countdown expires or the stop flag is raised.
fn run_ticker(state: &CountdownState, stop: &AtomicBool) {
    loop {
        if stop.load(Ordering::Acquire) {
            return;
        }
        if state.tick() == TickOutcome::Expired {
            return;
        }
        let mut waited = Duration::ZERO;
        while waited < TICK_PERIOD {
            if stop.load(Ordering::Acquire) {
                return;
            }
            thread::sleep(TICK_CANCEL_POLL);
            waited += TICK_CANCEL_POLL;
        }
    }
}

// =============================================================================
// Countdown
// =============================================================================

/// The countdown widget's stateful half: owns the shared counter and the
/// ticker thread driving it.
pub struct Countdown {
    state: Arc<CountdownState>,
    ticker: Option<Ticker>,
}

impl Countdown {
    /// Create an idle countdown at the default duration. No ticker runs
    /// until [`set_duration`](Self::set_duration) is called.
    pub fn new() -> Self {
        Self {
            state: Arc::new(CountdownState::new(DEFAULT_DURATION_SECS)),
            ticker: None,
        }
    }

    /// Set total and remaining to `seconds` and (re)start the ticker.
    ///
    /// Any previous ticker is cancelled and joined first, so exactly one
    /// ticker drives the counter and a replaced ticker cannot fire again
    /// after this call returns.
    pub fn set_duration(&mut self, seconds: u32) {
        self.stop();
        self.state.reset(seconds);
        self.ticker = Some(Ticker::spawn(Arc::clone(&self.state)));
    }

    /// Cancel the ticker if one is running. Idempotent; safe to call before
    /// any countdown has started. The counter keeps its current value.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Whether a ticker thread is currently alive. An expired countdown
    /// reports `false` once its ticker has wound down.
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 { self.state.remaining() }

    /// Duration the countdown started from.
    pub fn total(&self) -> u32 { self.state.total() }

    /// Consume the pending redraw request, if any.
    pub fn take_redraw(&self) -> bool { self.state.take_redraw() }
}

impl Default for Countdown {
    fn default() -> Self { Self::new() }
}

impl Drop for Countdown {
    fn drop(&mut self) { self.stop(); }
}

// =============================================================================
// Time Formatting
// =============================================================================

/// Format seconds as `HH:MM:SS`.
///
/// Minutes and seconds are always two digits. Hours are two digits below
/// 100 and widen naturally past that, so very large durations still render.
pub fn format_hms(seconds: u32) -> String<16> {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    let mut out = String::new();
    write!(out, "{hours:02}:{minutes:02}:{secs:02}").ok();
    out
}

/// The ring face shows `MM:SS`: the full `HH:MM:SS` with the hour field
/// stripped through its trailing colon.
pub fn display_text(seconds: u32) -> String<16> {
    let full = format_hms(seconds);
    let mm_ss = full.find(':').map_or(full.as_str(), |idx| &full[idx + 1..]);
    let mut out = String::new();
    write!(out, "{mm_ss}").ok();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_hms_boundaries() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(9).as_str(), "00:00:09");
        assert_eq!(format_hms(59).as_str(), "00:00:59");
        assert_eq!(format_hms(60).as_str(), "00:01:00");
        assert_eq!(format_hms(3599).as_str(), "00:59:59");
        assert_eq!(format_hms(3600).as_str(), "01:00:00");
        assert_eq!(format_hms(36000).as_str(), "10:00:00");
    }

    #[test]
    fn test_format_hms_large_hours() {
        assert_eq!(format_hms(100 * 3600).as_str(), "100:00:00", "Hours widen past two digits");
    }

    #[test]
    fn test_display_text_strips_hours() {
        assert_eq!(display_text(125).as_str(), "02:05");
        assert_eq!(display_text(0).as_str(), "00:00");
        assert_eq!(display_text(3725).as_str(), "02:05", "1h 2m 5s shows minutes within the hour");
        assert_eq!(display_text(59 * 60 + 59).as_str(), "59:59");
    }

    // -------------------------------------------------------------------------
    // Fraction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fraction_in_unit_range() {
        assert_eq!(progress_fraction(0, 0), 0.0, "Zero total must not divide");
        assert_eq!(progress_fraction(5, 0), 0.0, "Zero total must not divide");
        assert_eq!(progress_fraction(0, 10), 0.0);
        assert_eq!(progress_fraction(10, 10), 1.0);
        assert_eq!(progress_fraction(5, 10), 0.5);
        assert_eq!(progress_fraction(20, 10), 1.0, "Excess remaining clamps to full");
    }

    // -------------------------------------------------------------------------
    // Tick Transition Tests (deterministic, no threads)
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_counts_down_to_zero() {
        let state = CountdownState::new(3);
        for expected in [2, 1, 0] {
            assert_eq!(state.tick(), TickOutcome::Running);
            assert_eq!(state.remaining(), expected);
        }
        assert_eq!(state.tick(), TickOutcome::Expired, "Tick at zero expires");
        assert_eq!(state.remaining(), 0, "Expired tick must not decrement");
        assert_eq!(state.total(), 3, "Total is untouched by ticking");
    }

    #[test]
    fn test_tick_zero_duration_expires_immediately() {
        let state = CountdownState::new(0);
        assert_eq!(state.tick(), TickOutcome::Expired);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_reset_restores_counter_and_requests_redraw() {
        let state = CountdownState::new(10);
        state.tick();
        state.take_redraw();
        state.reset(7);
        assert_eq!(state.remaining(), 7);
        assert_eq!(state.total(), 7);
        assert!(state.take_redraw(), "Reset should request a repaint");
    }

    #[test]
    fn test_redraw_flag_is_consumed_once() {
        let state = CountdownState::new(5);
        state.take_redraw(); // clear the construction-time request
        assert!(!state.take_redraw(), "No request pending");
        state.tick();
        assert!(state.take_redraw(), "Tick should request a repaint");
        assert!(!state.take_redraw(), "Request is consumed by the first take");
    }

    // -------------------------------------------------------------------------
    // Ticker Lifecycle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_stop_is_idempotent() {
        let mut countdown = Countdown::new();
        assert!(!countdown.is_running(), "No ticker before set_duration");
        countdown.stop();
        countdown.stop();
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), crate::config::DEFAULT_DURATION_SECS);
    }

    #[test]
    fn test_set_duration_starts_ticker() {
        let mut countdown = Countdown::new();
        countdown.set_duration(3600);
        assert!(countdown.is_running());
        assert_eq!(countdown.total(), 3600);
        // The first tick fires immediately, so the counter may already have
        // moved by one when we read it.
        let remaining = countdown.remaining();
        assert!(
            remaining == 3600 || remaining == 3599,
            "Remaining should be at the duration, minus at most the immediate first tick"
        );
    }

    #[test]
    fn test_set_duration_replaces_ticker() {
        let mut countdown = Countdown::new();
        countdown.set_duration(100);
        countdown.set_duration(10_000);
        // The old ticker was joined inside set_duration; only the new one may
        // have ticked since the reset.
        let remaining = countdown.remaining();
        assert!(
            remaining >= 9_999,
            "Old ticker must not keep decrementing, got {remaining}"
        );
        assert_eq!(countdown.total(), 10_000);
    }

    #[test]
    fn test_stop_freezes_counter() {
        let mut countdown = Countdown::new();
        countdown.set_duration(10_000);
        countdown.stop();
        assert!(!countdown.is_running());
        let frozen = countdown.remaining();
        thread::sleep(Duration::from_millis(1300));
        assert_eq!(countdown.remaining(), frozen, "Stopped countdown must not tick");
    }

    #[test]
    fn test_ticker_expires_and_ends() {
        let mut countdown = Countdown::new();
        countdown.set_duration(1);
        // Immediate tick takes 1 -> 0; the tick one period later expires the
        // ticker. Allow generous margin for a loaded machine.
        thread::sleep(Duration::from_millis(2500));
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running(), "Expired ticker thread should have ended");
    }
}
