use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay between picking an option and the automatic step advance.
pub const AUTO_ADVANCE_MS: u32 = 500;
/// How long a validation notice stays up before dismissing itself.
pub const VALIDATION_DISMISS_MS: u32 = 3_000;
/// Minimum time the splash screen is visible, measured from mount.
pub const SPLASH_MIN_VISIBLE_MS: i64 = 2_000;
/// Splash fade-out duration, must match the CSS transition.
pub const SPLASH_FADE_MS: u32 = 500;

pub const HEADLINE_TYPE_MS: u32 = 100;
pub const HEADLINE_START_DELAY_MS: u32 = 1_000;
pub const DESCRIPTION_TYPE_MS: u32 = 80;
pub const DESCRIPTION_START_DELAY_MS: u32 = 2_000;

pub const NAV_RESIZE_DEBOUNCE_MS: u32 = 100;
pub const MOBILE_BREAKPOINT_PX: i32 = 768;
