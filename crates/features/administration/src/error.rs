use shopdesk_kernel::security::SecurityError;
use std::borrow::Cow;

/// A specialized [`AdministrationError`] enum of this crate.
#[shopdesk_derive::shopdesk_error]
pub enum AdministrationError {
    /// A validation error names a field that has no label.
    #[error("Field not found{}: {message}", format_context(.context))]
    FieldNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The shop context does not allow the submitted change.
    #[error("Administration security error{}: {source}", format_context(.context))]
    Security { source: SecurityError, context: Option<Cow<'static, str>> },

    /// The configuration store failed.
    #[error("Configuration store error{}: {message}", format_context(.context))]
    Store { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal administration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
