pub mod app;
pub mod converter;
pub mod validation;

use anyhow::Result;
use log::*;

pub fn run() -> Result<()> {
    // Create and run the interactive terminal
    let app = app::Application::new();
    info!("Initializing Clockspeak terminal");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use converter::{convert, ConvertError, TimeOfDay};
pub use validation::validate_time_format;
