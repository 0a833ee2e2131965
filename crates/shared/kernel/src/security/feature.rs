use crate::domain::features::FeatureSet;
use std::sync::Arc;

/// Reports whether an optional subsystem is active for the deployment.
pub trait FeatureFlag: Send + Sync {
    fn is_used(&self) -> bool;
}

impl<T: FeatureFlag + ?Sized> FeatureFlag for &T {
    fn is_used(&self) -> bool {
        (**self).is_used()
    }
}

impl<T: FeatureFlag + ?Sized> FeatureFlag for Arc<T> {
    fn is_used(&self) -> bool {
        (**self).is_used()
    }
}

impl<T: FeatureFlag + ?Sized> FeatureFlag for Box<T> {
    fn is_used(&self) -> bool {
        (**self).is_used()
    }
}

/// A flag fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFeature(bool);

impl StaticFeature {
    #[must_use]
    pub const fn new(used: bool) -> Self {
        Self(used)
    }
}

impl FeatureFlag for StaticFeature {
    fn is_used(&self) -> bool {
        self.0
    }
}

/// The multistore flag as read from the deployment's enabled [`FeatureSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultistoreFeature {
    features: FeatureSet,
}

impl MultistoreFeature {
    #[must_use]
    pub const fn new(features: FeatureSet) -> Self {
        Self { features }
    }
}

impl FeatureFlag for MultistoreFeature {
    fn is_used(&self) -> bool {
        self.features.contains(FeatureSet::MULTISTORE)
    }
}
