use log::Level;

pub fn get_form_endpoint() -> &'static str {
    "https://delovoy-form.juuzoucode.workers.dev/"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Loader
pub const LOADER_GRACE_MS: u32 = 1800;
pub const LOADER_FALLBACK_MS: u32 = 3500;

// Header
pub const HEADER_SCROLLED_AFTER: f64 = 50.0;
pub const HEADER_HIDE_AFTER: f64 = 200.0;

// Smooth anchors land this far above the target so the fixed header doesn't cover it
pub const ANCHOR_OFFSET: f64 = 100.0;

// Scroll animations
pub const REVEAL_SELECTOR: &str = ".section-header, .about-grid, .advantage-card, .plans-wrapper, \
     .gallery-card, .pricing-card, .contact-wrapper, .footer-main";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_DELAY_STEP: f64 = 0.05;

pub const PARALLAX_SPEED: f64 = 0.3;
pub const PARALLAX_SCALE: f64 = 1.1;

pub const STATS_THRESHOLD: f64 = 0.5;
pub const STATS_DELAY_MS: u32 = 300;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Phone mask (Kyrgyzstan)
pub const PHONE_COUNTRY_CODE: &str = "996";
pub const PHONE_PREFIX: &str = "+996 ";
