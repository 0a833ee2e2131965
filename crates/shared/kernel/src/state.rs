use crate::domain::config::ShopdeskConfig;
use crate::domain::registry::{FeatureSlice, InitializedSlice};
use crate::security::feature::MultistoreFeature;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[shopdesk_derive::shopdesk_error]
pub enum StateError {
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ShopdeskStateInner {
    pub config: ShopdeskConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Application state: configuration plus every initialized feature slice.
#[derive(Debug, Clone)]
pub struct ShopdeskState {
    inner: Arc<ShopdeskStateInner>,
}

impl ShopdeskState {
    #[must_use]
    pub fn builder() -> ShopdeskStateBuilder {
        ShopdeskStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, StateError> {
        self.get_slice::<T>().ok_or_else(|| StateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices, sorted.
    #[must_use]
    pub fn slice_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.slices.values().map(InitializedSlice::name).collect();
        names.sort_unstable();
        names
    }

    /// The deployment's multistore flag.
    #[must_use]
    pub fn multistore_feature(&self) -> MultistoreFeature {
        MultistoreFeature::new(self.inner.config.features)
    }
}

impl Deref for ShopdeskState {
    type Target = ShopdeskStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct ShopdeskStateBuilder {
    config: Option<ShopdeskConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl ShopdeskStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ShopdeskConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices(mut self, slices: impl IntoIterator<Item = InitializedSlice>) -> Self {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Builds the state; a missing config falls back to defaults.
    #[must_use]
    pub fn build(self) -> ShopdeskState {
        ShopdeskState {
            inner: Arc::new(ShopdeskStateInner {
                config: self.config.unwrap_or_default(),
                slices: self.slices,
            }),
        }
    }
}
