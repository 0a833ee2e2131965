//! Human-readable messages for rejected administration settings.

use crate::error::AdministrationError;
use crate::validation::{
    ErrorCode, InvalidConfigurationDataError, InvalidConfigurationDataErrorCollection,
};
use shopdesk_domain::administration::{GeneralSettings, UploadQuotaSettings};
use shopdesk_domain::constants::MAX_COOKIE_VALUE;

pub const UPDATE_SUCCESSFUL: &str = "Update successful";

/// Label shown for a field in error messages.
///
/// # Errors
/// Returns [`AdministrationError::FieldNotFound`] for a field without a label.
pub fn field_label(field_name: &str) -> Result<&'static str, AdministrationError> {
    match field_name {
        UploadQuotaSettings::FIELD_MAX_SIZE_ATTACHED_FILES => Ok("Maximum size for attached files"),
        UploadQuotaSettings::FIELD_MAX_SIZE_DOWNLOADABLE_FILE => {
            Ok("Maximum size for a downloadable product")
        },
        UploadQuotaSettings::FIELD_MAX_SIZE_PRODUCT_IMAGE => Ok("Maximum size for a product's image"),
        GeneralSettings::FIELD_FRONT_COOKIE_LIFETIME => Ok("Lifetime of front office cookies"),
        GeneralSettings::FIELD_BACK_COOKIE_LIFETIME => Ok("Lifetime of back office cookies"),
        _ => Err(AdministrationError::FieldNotFound {
            message: format!("Field name for field {field_name} not found").into(),
            context: None,
        }),
    }
}

/// Message for a single rejected value.
///
/// The SameSite message names no field, so it never fails.
///
/// # Errors
/// Returns [`AdministrationError::FieldNotFound`] when the message needs a label the
/// field does not have.
pub fn error_message(error: &InvalidConfigurationDataError) -> Result<String, AdministrationError> {
    match error.error_code {
        ErrorCode::NotNumericOrLowerThanZero => Ok(format!(
            "{} is invalid. Please enter an integer greater than or equal to 0.",
            field_label(&error.field_name)?
        )),
        ErrorCode::CookieLifetimeMaxValueExceeded => Ok(format!(
            "{} is invalid. Please enter an integer lower than {MAX_COOKIE_VALUE}.",
            field_label(&error.field_name)?
        )),
        ErrorCode::CookieSameSiteNone => {
            Ok("The SameSite=None attribute is only available in secure mode.".to_owned())
        },
    }
}

/// Messages for every error of a submission, in order.
///
/// # Errors
/// Fails on the first error whose field has no label.
pub fn error_messages(
    errors: &InvalidConfigurationDataErrorCollection,
) -> Result<Vec<String>, AdministrationError> {
    errors.iter().map(error_message).collect()
}
