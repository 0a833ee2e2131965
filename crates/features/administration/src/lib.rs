//! Administration feature slice.
//!
//! Validates and stores the "General", "Upload quota" and "Notifications" settings of
//! the back office. Cookie lifetimes are shared by every shop, so the "General" form
//! goes through the kernel's [`OptionsAuthorizer`] first.

mod error;
pub mod messages;
pub mod service;
pub mod validation;

pub use crate::error::{AdministrationError, AdministrationErrorExt};
pub use crate::service::{
    AdministrationForm, AdministrationService, ConfigurationStore, FormOutcome, HookDispatcher,
    InMemoryConfigurationStore, SettingsEdit, TracingHooks,
};
pub use shopdesk_kernel::security::options::OptionsAuthorizer;

use shopdesk_domain::config::ShopdeskConfig;
use shopdesk_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Administration feature state.
#[shopdesk_derive::shopdesk_slice]
pub struct Administration {
    pub service: AdministrationService,
}

/// Initialize the administration feature from the configured settings.
///
/// # Errors
/// Returns an error if the configured settings are invalid.
pub fn init(config: &ShopdeskConfig) -> Result<InitializedSlice, AdministrationError> {
    let initial = &config.administration;
    let rejected = validation::validate_general(&initial.general, config.shop.ssl_enabled)
        .iter()
        .chain(validation::validate_upload_quota(&initial.upload_quota).iter())
        .map(messages::error_message)
        .collect::<Result<Vec<_>, _>>()?;

    if !rejected.is_empty() {
        return Err(AdministrationError::Internal {
            message: rejected.join(" ").into(),
            context: Some("Invalid administration settings in config".into()),
        });
    }

    let store = Arc::new(InMemoryConfigurationStore::new(initial.clone()));
    let service = AdministrationService::new(store, Arc::new(TracingHooks), config.shop.ssl_enabled);

    tracing::info!("Administration slice initialized");

    Ok(InitializedSlice::new(Administration::new(AdministrationInner { service })))
}
