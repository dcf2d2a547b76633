//! Quiz GUI Client - Main Entry Point
//!
//! Welcome and language settings screens of the quiz application

use quiz_gui::app::application::run_app;
use quiz_gui::logging::init_logging;

fn main() {
    // Keep the file writer alive for the whole run
    let _log_guard = init_logging();

    tracing::info!("Starting Quiz GUI Client...");

    // Run the GPUI application
    run_app();
}
