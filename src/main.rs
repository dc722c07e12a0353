//! Opens the hello-glow window with the default config and runs until closed.

use anyhow::Context as _;
use hello_glow::{logging, WindowConfig};

fn main() {
    logging::init_logging(logging::LoggingConfig::default());

    if let Err(err) = hello_glow::run(WindowConfig::default()).context("hello-glow failed") {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
