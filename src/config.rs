use log::Level;

/// How often the carousel moves to the next slide on its own.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Starting value of the offer countdown, in seconds (5 minutes).
pub const OFFER_SECONDS: u32 = 300;

pub fn checkout_url() -> &'static str {
    "https://pay.kirvano.com/bd19b8ec-bfd8-436d-aa4a-955baaa6b569"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Carousel transitions are visible when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
