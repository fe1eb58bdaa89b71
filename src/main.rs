// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in graphics calculations
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know sign is positive

//! Circular countdown timer simulator.
//!
//! Hosts the countdown ring widget in an SDL simulator window. The widget
//! owns a one-second ticker that counts a duration down to zero and raises a
//! redraw flag on every tick; the frame loop here repaints whenever that flag
//! was raised and otherwise just keeps the window alive at ~50 FPS.
//!
//! # Controls
//!
//! - `Space` - restart the countdown at the configured duration
//! - `S` - stop the countdown (the readout freezes)
//! - `Up` / `Down` - adjust the duration by one minute and restart

mod colors;
mod config;
mod countdown;
mod geometry;
mod render;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use colors::{BLACK, RingPalette};
use config::{DEFAULT_DURATION_SECS, DURATION_STEP_SECS, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use countdown::Countdown;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use geometry::RingGeometry;
use render::RenderState;
use widgets::draw_countdown_ring;

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Countdown Ring", &output_settings);

    // The simulator window never resizes, so the ring is measured once.
    let geometry = RingGeometry::measure(SCREEN_WIDTH, SCREEN_HEIGHT);
    let palette = RingPalette::default();

    let mut duration_secs = DEFAULT_DURATION_SECS;
    let mut countdown = Countdown::new();
    countdown.set_duration(duration_secs);
    log::info!("countdown started at {duration_secs}s");

    let mut render_state = RenderState::new();
    let mut was_running = countdown.is_running();

    display.clear(BLACK).ok();
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    // Space: restart at the configured duration
                    Keycode::Space if !repeat => {
                        countdown.set_duration(duration_secs);
                        log::info!("countdown restarted at {duration_secs}s");
                    }
                    // S: stop; the readout freezes at the current value
                    Keycode::S if !repeat => {
                        countdown.stop();
                        log::info!("countdown stopped with {}s remaining", countdown.remaining());
                    }
                    // Up/Down: adjust the duration one minute at a time
                    // (key repeat allowed so holding the key scrolls)
                    Keycode::Up => {
                        duration_secs = duration_secs.saturating_add(DURATION_STEP_SECS);
                        countdown.set_duration(duration_secs);
                        log::info!("duration set to {duration_secs}s");
                    }
                    Keycode::Down => {
                        duration_secs = duration_secs.saturating_sub(DURATION_STEP_SECS);
                        countdown.set_duration(duration_secs);
                        log::info!("duration set to {duration_secs}s");
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // The ticker winds down on its own when the countdown expires; log
        // the transition once. A manual stop is logged at the keypress.
        let running = countdown.is_running();
        if was_running && !running && countdown.remaining() == 0 {
            log::info!("countdown expired");
        }
        was_running = running;

        // Repaint only when a tick or restart changed the picture.
        if render_state.should_redraw(countdown.take_redraw()) {
            display.clear(BLACK).ok();
            draw_countdown_ring(
                &mut display,
                &geometry,
                countdown.remaining(),
                countdown.total(),
                &palette,
            );
        }
        window.update(&display);

        // Sleep out the rest of the frame (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    // Window closed: release the ticker thread before exit.
    countdown.stop();
}
