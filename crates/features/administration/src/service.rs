//! Processing of the three administration forms.

use crate::error::AdministrationError;
use crate::messages::{UPDATE_SUCCESSFUL, error_messages};
use crate::validation::{
    InvalidConfigurationDataErrorCollection, validate_general, validate_upload_quota,
};
use parking_lot::RwLock;
use shopdesk_domain::administration::{
    AdministrationSettings, GeneralSettings, NotificationsSettings, UploadQuotaSettings,
};
use shopdesk_kernel::security::options::OptionsAuthorizer;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info};

const HOOK_PREFIX: &str = "actionAdminAdministrationControllerPostProcess";

/// One change to the stored settings; returning an error discards it.
pub type SettingsEdit<'a> =
    dyn FnMut(&mut AdministrationSettings) -> Result<(), AdministrationError> + 'a;

/// Persists administration settings.
pub trait ConfigurationStore: Debug + Send + Sync {
    /// # Errors
    /// Returns [`AdministrationError::Store`] when the settings cannot be read.
    fn load(&self) -> Result<AdministrationSettings, AdministrationError>;

    /// Applies `edit` to the current settings as a single step: no other update may
    /// run between reading the settings handed to `edit` and storing the result.
    ///
    /// # Errors
    /// Returns the error of `edit`, or [`AdministrationError::Store`] when the settings
    /// cannot be written.
    fn update(&self, edit: &mut SettingsEdit<'_>) -> Result<(), AdministrationError>;
}

/// Lets extensions observe form processing.
pub trait HookDispatcher: Debug + Send + Sync {
    fn dispatch(&self, hook: &str);
}

/// Store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryConfigurationStore {
    settings: RwLock<AdministrationSettings>,
}

impl InMemoryConfigurationStore {
    #[must_use]
    pub fn new(settings: AdministrationSettings) -> Self {
        Self { settings: RwLock::new(settings) }
    }
}

impl ConfigurationStore for InMemoryConfigurationStore {
    fn load(&self) -> Result<AdministrationSettings, AdministrationError> {
        Ok(self.settings.read().clone())
    }

    fn update(&self, edit: &mut SettingsEdit<'_>) -> Result<(), AdministrationError> {
        let mut settings = self.settings.write();
        let mut draft = settings.clone();
        edit(&mut draft)?;
        *settings = draft;
        Ok(())
    }
}

/// Dispatcher that only traces hook names.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl HookDispatcher for TracingHooks {
    fn dispatch(&self, hook: &str) {
        debug!(hook, "Hook dispatched");
    }
}

/// Which administration form is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdministrationForm {
    General,
    UploadQuota,
    Notifications,
}

impl AdministrationForm {
    #[must_use]
    pub const fn hook_name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::UploadQuota => "UploadQuota",
            Self::Notifications => "Notifications",
        }
    }
}

/// Result of a processed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Settings stored; carries the success message.
    Saved(&'static str),
    /// Nothing stored; carries one message per rejected value.
    Invalid(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AdministrationService {
    store: Arc<dyn ConfigurationStore>,
    hooks: Arc<dyn HookDispatcher>,
    ssl_enabled: bool,
}

impl AdministrationService {
    pub fn new(
        store: Arc<dyn ConfigurationStore>,
        hooks: Arc<dyn HookDispatcher>,
        ssl_enabled: bool,
    ) -> Self {
        Self { store, hooks, ssl_enabled }
    }

    /// Current settings of every form.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn settings(&self) -> Result<AdministrationSettings, AdministrationError> {
        self.store.load()
    }

    /// Processes the "General" form.
    ///
    /// Cookie lifetimes are shared by every shop: changing them requires `options` to
    /// allow it. The lifetimes are compared with the stored ones inside the store
    /// update, so a concurrent save cannot be overwritten unchecked. Resubmitting the
    /// stored lifetimes is always accepted.
    ///
    /// # Errors
    /// Returns [`AdministrationError::Security`] when the change is not allowed in the
    /// current shop context, or propagates message and store failures.
    pub fn process_general(
        &self,
        options: &dyn OptionsAuthorizer,
        submitted: GeneralSettings,
    ) -> Result<FormOutcome, AdministrationError> {
        self.dispatch_before(AdministrationForm::General);

        let errors = validate_general(&submitted, self.ssl_enabled);
        self.store.update(&mut |settings| {
            if settings.general.changes_cross_shop_options(&submitted) {
                options.ensure_can_be_changed()?;
            }
            if errors.is_empty() {
                settings.general = submitted.clone();
            }
            Ok(())
        })?;

        Self::outcome(AdministrationForm::General, &errors)
    }

    /// Processes the "Upload quota" form.
    ///
    /// # Errors
    /// Propagates message and store failures.
    pub fn process_upload_quota(
        &self,
        submitted: UploadQuotaSettings,
    ) -> Result<FormOutcome, AdministrationError> {
        self.dispatch_before(AdministrationForm::UploadQuota);

        let errors = validate_upload_quota(&submitted);
        if errors.is_empty() {
            self.store.update(&mut |settings| {
                settings.upload_quota = submitted.clone();
                Ok(())
            })?;
        }

        Self::outcome(AdministrationForm::UploadQuota, &errors)
    }

    /// Processes the "Notifications" form; every combination is valid.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn process_notifications(
        &self,
        submitted: NotificationsSettings,
    ) -> Result<FormOutcome, AdministrationError> {
        self.dispatch_before(AdministrationForm::Notifications);

        self.store.update(&mut |settings| {
            settings.notifications = submitted.clone();
            Ok(())
        })?;

        Self::outcome(
            AdministrationForm::Notifications,
            &InvalidConfigurationDataErrorCollection::new(),
        )
    }

    fn dispatch_before(&self, form: AdministrationForm) {
        self.hooks.dispatch(&format!("{HOOK_PREFIX}{}Before", form.hook_name()));
        self.hooks.dispatch(&format!("{HOOK_PREFIX}Before"));
    }

    fn outcome(
        form: AdministrationForm,
        errors: &InvalidConfigurationDataErrorCollection,
    ) -> Result<FormOutcome, AdministrationError> {
        if !errors.is_empty() {
            debug!(form = form.hook_name(), errors = errors.len(), "Submitted settings rejected");
            return Ok(FormOutcome::Invalid(error_messages(errors)?));
        }

        info!(form = form.hook_name(), "Settings saved");
        Ok(FormOutcome::Saved(UPDATE_SUCCESSFUL))
    }
}
