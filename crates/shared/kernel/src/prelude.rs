//! Common imports for feature slices.

pub use crate::domain::features::FeatureSet;
pub use crate::domain::shop::{ShopConstraint, ShopGroupId, ShopId};
pub use crate::security::context::ShopContextChecker;
pub use crate::security::feature::{FeatureFlag, MultistoreFeature, StaticFeature};
pub use crate::security::options::{OptionsAuthorizer, OptionsChecker};
pub use crate::security::{SecurityError, SecurityErrorExt};
