//! Validation of submitted administration settings.

use shopdesk_domain::administration::{CookieSameSite, GeneralSettings, UploadQuotaSettings};
use shopdesk_domain::constants::MAX_COOKIE_VALUE;
use std::borrow::Cow;

/// Why a submitted value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotNumericOrLowerThanZero,
    CookieLifetimeMaxValueExceeded,
    CookieSameSiteNone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidConfigurationDataError {
    pub error_code: ErrorCode,
    pub field_name: Cow<'static, str>,
}

impl InvalidConfigurationDataError {
    pub fn new(error_code: ErrorCode, field_name: impl Into<Cow<'static, str>>) -> Self {
        Self { error_code, field_name: field_name.into() }
    }
}

/// Errors of one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidConfigurationDataErrorCollection {
    errors: Vec<InvalidConfigurationDataError>,
}

impl InvalidConfigurationDataErrorCollection {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: InvalidConfigurationDataError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvalidConfigurationDataError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a InvalidConfigurationDataErrorCollection {
    type Item = &'a InvalidConfigurationDataError;
    type IntoIter = std::slice::Iter<'a, InvalidConfigurationDataError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<InvalidConfigurationDataError> for InvalidConfigurationDataErrorCollection {
    fn from_iter<I: IntoIterator<Item = InvalidConfigurationDataError>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

/// Checks the "General" form. `ssl_enabled` tells whether the shop is served over HTTPS.
#[must_use]
pub fn validate_general(
    settings: &GeneralSettings,
    ssl_enabled: bool,
) -> InvalidConfigurationDataErrorCollection {
    let mut errors = InvalidConfigurationDataErrorCollection::new();

    for (field, value) in [
        (GeneralSettings::FIELD_FRONT_COOKIE_LIFETIME, settings.front_cookie_lifetime),
        (GeneralSettings::FIELD_BACK_COOKIE_LIFETIME, settings.back_cookie_lifetime),
    ] {
        if value < 0 {
            errors.add(InvalidConfigurationDataError::new(ErrorCode::NotNumericOrLowerThanZero, field));
        } else if value > MAX_COOKIE_VALUE {
            errors.add(InvalidConfigurationDataError::new(
                ErrorCode::CookieLifetimeMaxValueExceeded,
                field,
            ));
        }
    }

    if settings.cookie_samesite == CookieSameSite::None && !ssl_enabled {
        errors.add(InvalidConfigurationDataError::new(
            ErrorCode::CookieSameSiteNone,
            GeneralSettings::FIELD_COOKIE_SAMESITE,
        ));
    }

    errors
}

/// Checks the "Upload quota" form: every size must be zero or more.
#[must_use]
pub fn validate_upload_quota(settings: &UploadQuotaSettings) -> InvalidConfigurationDataErrorCollection {
    [
        (UploadQuotaSettings::FIELD_MAX_SIZE_ATTACHED_FILES, settings.max_size_attached_files),
        (
            UploadQuotaSettings::FIELD_MAX_SIZE_DOWNLOADABLE_FILE,
            settings.max_size_downloadable_product,
        ),
        (UploadQuotaSettings::FIELD_MAX_SIZE_PRODUCT_IMAGE, settings.max_size_product_image),
    ]
    .into_iter()
    .filter(|(_, value)| *value < 0)
    .map(|(field, _)| InvalidConfigurationDataError::new(ErrorCode::NotNumericOrLowerThanZero, field))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(validate_general(&GeneralSettings::default(), false).is_empty());
        assert!(validate_upload_quota(&UploadQuotaSettings::default()).is_empty());
    }

    #[test]
    fn cookie_lifetime_bounds() {
        let settings = GeneralSettings {
            front_cookie_lifetime: -1,
            back_cookie_lifetime: MAX_COOKIE_VALUE + 1,
            ..GeneralSettings::default()
        };

        let errors = validate_general(&settings, true);
        let found: Vec<_> = errors.iter().map(|e| (e.error_code, e.field_name.as_ref())).collect();
        assert_eq!(
            found,
            vec![
                (ErrorCode::NotNumericOrLowerThanZero, "front_cookie_lifetime"),
                (ErrorCode::CookieLifetimeMaxValueExceeded, "back_cookie_lifetime"),
            ]
        );
    }

    #[test]
    fn max_cookie_value_itself_is_accepted() {
        let settings =
            GeneralSettings { front_cookie_lifetime: MAX_COOKIE_VALUE, ..GeneralSettings::default() };
        assert!(validate_general(&settings, true).is_empty());
    }

    #[test]
    fn samesite_none_requires_ssl() {
        let settings =
            GeneralSettings { cookie_samesite: CookieSameSite::None, ..GeneralSettings::default() };

        assert!(validate_general(&settings, true).is_empty());

        let errors = validate_general(&settings, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next().map(|e| e.error_code), Some(ErrorCode::CookieSameSiteNone));
    }

    #[test]
    fn negative_quotas_are_reported_per_field() {
        let settings = UploadQuotaSettings {
            max_size_attached_files: -2,
            max_size_downloadable_product: 0,
            max_size_product_image: -1,
        };

        let fields: Vec<_> =
            validate_upload_quota(&settings).iter().map(|e| e.field_name.to_string()).collect();
        assert_eq!(fields, vec!["max_size_attached_files", "max_size_product_image"]);
    }
}
