//! Back-office administration settings, as submitted by the three forms
//! of the administration page.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// `SameSite` attribute applied to the shop cookies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum CookieSameSite {
    None,
    #[default]
    Lax,
    Strict,
}

/// "General" form. Cookie lifetimes are stored once for the whole installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub check_modules_update: bool,
    pub check_ip_address: bool,
    /// Hours.
    pub front_cookie_lifetime: i64,
    /// Hours.
    pub back_cookie_lifetime: i64,
    pub cookie_samesite: CookieSameSite,
}

impl GeneralSettings {
    pub const FIELD_FRONT_COOKIE_LIFETIME: &'static str = "front_cookie_lifetime";
    pub const FIELD_BACK_COOKIE_LIFETIME: &'static str = "back_cookie_lifetime";
    pub const FIELD_COOKIE_SAMESITE: &'static str = "cookie_samesite";

    /// Whether `other` changes a value shared by every shop.
    #[must_use]
    pub const fn changes_cross_shop_options(&self, other: &Self) -> bool {
        self.front_cookie_lifetime != other.front_cookie_lifetime
            || self.back_cookie_lifetime != other.back_cookie_lifetime
    }
}

/// "Upload quota" form, sizes in megabytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadQuotaSettings {
    pub max_size_attached_files: i64,
    pub max_size_downloadable_product: i64,
    pub max_size_product_image: i64,
}

impl UploadQuotaSettings {
    pub const FIELD_MAX_SIZE_ATTACHED_FILES: &'static str = "max_size_attached_files";
    pub const FIELD_MAX_SIZE_DOWNLOADABLE_FILE: &'static str = "max_size_downloadable_product";
    pub const FIELD_MAX_SIZE_PRODUCT_IMAGE: &'static str = "max_size_product_image";
}

/// "Notifications" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsSettings {
    pub show_new_orders: bool,
    pub show_new_customers: bool,
    pub show_new_messages: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdministrationSettings {
    pub general: GeneralSettings,
    pub upload_quota: UploadQuotaSettings,
    pub notifications: NotificationsSettings,
}

// --- Default ---

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            check_modules_update: true,
            check_ip_address: true,
            front_cookie_lifetime: 480,
            back_cookie_lifetime: 480,
            cookie_samesite: CookieSameSite::default(),
        }
    }
}

impl Default for UploadQuotaSettings {
    fn default() -> Self {
        Self { max_size_attached_files: 2, max_size_downloadable_product: 2, max_size_product_image: 2 }
    }
}

impl Default for NotificationsSettings {
    fn default() -> Self {
        Self { show_new_orders: true, show_new_customers: true, show_new_messages: true }
    }
}
