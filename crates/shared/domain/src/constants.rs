//! Stable string identifiers used in config files and logs.

// Features
pub const MULTISTORE: &str = "multistore";
pub const ALIAS_SEARCH: &str = "alias_search";

/// Shop created at install time; every installation has it.
pub const DEFAULT_SHOP_ID: u32 = 1;

/// Upper bound for cookie lifetimes, in hours (100 years).
pub const MAX_COOKIE_VALUE: i64 = 876_000;
