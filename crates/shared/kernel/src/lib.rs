//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the shop-context security checks
//! and the registry of initialized slices.
//!
//! ## Option gating
//! ```rust
//! use shopdesk_kernel::prelude::*;
//!
//! let checker = OptionsChecker::new(StaticFeature::new(true), ShopConstraint::AllShops);
//! assert!(checker.can_be_changed());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use shopdesk_kernel::config::load_config;
//! use shopdesk_kernel::domain::config::ShopdeskConfig;
//!
//! let cfg: ShopdeskConfig = load_config(Some("shopdesk.toml")).unwrap();
//! ```
pub mod config;
pub mod prelude;
pub mod security;
pub mod state;

pub use shopdesk_domain as domain;
