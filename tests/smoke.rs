//! Open the window, present one frame, and tear everything down.
//!
//! Runs without the libtest harness so winit gets the main thread. Only a
//! machine that advertises no display at all skips the run; with a display,
//! every error fails the test.

mod common;

use hello_glow::{logging, WindowConfig};

fn main() {
    logging::init_logging(logging::LoggingConfig::default());

    if !common::display_expected() {
        println!("smoke: skipped, no DISPLAY or WAYLAND_DISPLAY set");
        return;
    }

    let config = WindowConfig {
        title: "hello-glow smoke".to_owned(),
        max_frames: Some(1),
        ..WindowConfig::default()
    };

    if let Err(err) = hello_glow::run(config) {
        panic!("init + teardown failed with a display present: {err}");
    }
    println!("smoke: init + teardown ok");
}
