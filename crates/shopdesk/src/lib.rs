//! Facade crate for Shopdesk features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `shopdesk` with the desired feature flags (`administration`/`search`).
//! - Call [`init`] to build the application state with every enabled slice registered.

pub use shopdesk_domain as domain;
pub use shopdesk_kernel as kernel;

use shopdesk_domain::config::ShopdeskConfig;
#[cfg(feature = "search")]
use shopdesk_domain::features::FeatureSet;
use shopdesk_domain::shop::ShopConstraint;
use shopdesk_kernel::security::feature::MultistoreFeature;
use shopdesk_kernel::security::options::OptionsChecker;
use shopdesk_kernel::state::ShopdeskState;
use std::borrow::Cow;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "administration")]
    pub use shopdesk_administration as administration;
    #[cfg(feature = "search")]
    pub use shopdesk_search as search;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "administration")]
        "administration",
        #[cfg(feature = "search")]
        "search",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[shopdesk_derive::shopdesk_error]
pub enum InitError {
    #[cfg(feature = "administration")]
    #[error("Administration init failed{}: {source}", format_context(.context))]
    Administration {
        source: shopdesk_administration::AdministrationError,
        context: Option<Cow<'static, str>>,
    },

    #[cfg(feature = "search")]
    #[error("Search init failed{}: {source}", format_context(.context))]
    Search { source: shopdesk_search::SearchError, context: Option<Cow<'static, str>> },

    #[error("Internal init error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Initialize all enabled features and build the application state.
///
/// The search slice is only registered when `alias_search` is part of
/// `config.features`.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: ShopdeskConfig) -> Result<ShopdeskState, InitError> {
    let mut builder = ShopdeskState::builder();

    // Administration
    #[cfg(feature = "administration")]
    {
        builder = builder.register_slice(features::administration::init(&config)?);
    }

    // Search aliases (optional per deployment)
    #[cfg(feature = "search")]
    if config.features.contains(FeatureSet::ALIAS_SEARCH) {
        builder = builder.register_slice(features::search::init(&config)?);
    }

    let state = builder.config(config).build();
    tracing::info!(slices = ?state.slice_names(), "Shopdesk initialized");

    Ok(state)
}

/// Checker for options shared by every shop, bound to the deployment's multistore flag.
#[must_use]
pub fn options_checker(
    state: &ShopdeskState,
    shop_context: ShopConstraint,
) -> OptionsChecker<MultistoreFeature, ShopConstraint> {
    OptionsChecker::new(state.multistore_feature(), shop_context)
}
