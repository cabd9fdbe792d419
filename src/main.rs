use log::{error, info};

use delovoy_landing::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting DELOVOY landing");
    if let Err(e) = delovoy_landing::run() {
        error!("landing page failed to start: {}", e);
    }
}
