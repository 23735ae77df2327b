//! Application constants and configuration

pub const APP_NAME: &str = "Pizzeria";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Menu rows show at most this many characters of a name
pub const NAME_DISPLAY_MAX: usize = 25;
/// Longer names are cut to this many characters plus an ellipsis
pub const NAME_TRUNCATE_TO: usize = 22;

/// Shown in the expanded row when a pizza has no description yet
pub const DESCRIPTION_PLACEHOLDER: &str = "No description for this pizza yet.";
