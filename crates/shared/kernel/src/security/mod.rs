//! Shop-context security checks.
//!
//! The [`options::OptionsChecker`] decides whether an option shared by every shop may be
//! edited, from two collaborators: a [`feature::FeatureFlag`] telling whether multistore is
//! used and a [`context::ShopContextChecker`] describing the scope of the current request.

pub mod context;
pub mod feature;
pub mod options;

use std::borrow::Cow;

#[shopdesk_derive::shopdesk_error]
pub enum SecurityError {
    /// The caller may not perform the operation in the current shop context.
    #[error("Access denied{}: {message}", format_context(.context))]
    AccessDenied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
