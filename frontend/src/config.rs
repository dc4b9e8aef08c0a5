use log::Level;

use crate::state::locale::Locale;

/// localStorage key holding the persisted locale code.
pub const LOCALE_STORAGE_KEY: &str = "locale";

pub const DEFAULT_LOCALE: Locale = Locale::En;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
