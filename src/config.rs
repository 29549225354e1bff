use log::Level;

/// Visible fraction a block needs before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visible fraction a section needs to become the highlighted one.
pub const SECTION_THRESHOLD: f64 = 0.3;
/// Only the middle 60% of the viewport counts for section tracking.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

pub const ROLE_ROTATION_MS: u32 = 3000;
pub const TOAST_DISMISS_MS: u32 = 5000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
