pub mod load;
pub mod save;
pub mod types;

pub use types::{Config, DEFAULT_ZERO_PADDING, MAX_RECENT_PATHS, SETTINGS_FILE, UserSettings};
