use crate::security::SecurityError;
use crate::security::context::ShopContextChecker;
use crate::security::feature::FeatureFlag;
use tracing::{trace, warn};

/// Decides whether options shared by every shop can be changed right now.
pub trait OptionsAuthorizer: Send + Sync {
    fn can_be_changed(&self) -> bool;

    /// Same decision, as a `Result` for callers that reject the write with `?`.
    ///
    /// # Errors
    /// Returns [`SecurityError::AccessDenied`] when [`OptionsAuthorizer::can_be_changed`] is `false`.
    fn ensure_can_be_changed(&self) -> Result<(), SecurityError> {
        if self.can_be_changed() {
            return Ok(());
        }

        warn!("Shared option change rejected outside of the all shops context");
        Err(SecurityError::access_denied(
            "options shared by all shops can only be changed in the all shops context",
        ))
    }
}

/// Checks if employee options can be changed depending on the current shop context.
///
/// * Multistore unused and a single shop selected: the installation behaves as one
///   shop, the change is allowed.
/// * Otherwise the change is allowed only in the "all shops" context. A shop group,
///   or a single shop of a multistore installation, never qualifies.
#[derive(Debug, Clone)]
pub struct OptionsChecker<F, C> {
    multistore_feature: F,
    shop_context: C,
}

impl<F, C> OptionsChecker<F, C>
where
    F: FeatureFlag,
    C: ShopContextChecker,
{
    pub const fn new(multistore_feature: F, shop_context: C) -> Self {
        Self { multistore_feature, shop_context }
    }

    pub const fn multistore_feature(&self) -> &F {
        &self.multistore_feature
    }

    pub const fn shop_context(&self) -> &C {
        &self.shop_context
    }
}

impl<F, C> OptionsAuthorizer for OptionsChecker<F, C>
where
    F: FeatureFlag,
    C: ShopContextChecker,
{
    fn can_be_changed(&self) -> bool {
        if !self.multistore_feature.is_used() && self.shop_context.is_single_shop_context() {
            trace!(allowed = true, "Single shop installation");
            return true;
        }

        let allowed = self.shop_context.is_all_shop_context();
        trace!(allowed, "Multistore option check");
        allowed
    }
}

impl<T: OptionsAuthorizer + ?Sized> OptionsAuthorizer for &T {
    fn can_be_changed(&self) -> bool {
        (**self).can_be_changed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shop::ShopConstraint;
    use crate::security::feature::StaticFeature;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Context stub with independent answers, including the "both true" case.
    #[derive(Debug)]
    struct StubContext {
        single: bool,
        all: bool,
    }

    impl ShopContextChecker for StubContext {
        fn is_single_shop_context(&self) -> bool {
            self.single
        }

        fn is_all_shop_context(&self) -> bool {
            self.all
        }
    }

    fn checker(
        multistore: bool,
        single: bool,
        all: bool,
    ) -> OptionsChecker<StaticFeature, StubContext> {
        OptionsChecker::new(StaticFeature::new(multistore), StubContext { single, all })
    }

    #[test]
    fn single_shop_without_multistore_is_allowed() {
        assert!(checker(false, true, false).can_be_changed());
    }

    #[test]
    fn all_shops_without_multistore_is_allowed() {
        assert!(checker(false, false, true).can_be_changed());
    }

    #[test]
    fn single_shop_with_multistore_is_denied() {
        assert!(!checker(true, true, false).can_be_changed());
    }

    #[test]
    fn all_shops_with_multistore_is_allowed() {
        assert!(checker(true, false, true).can_be_changed());
    }

    #[test]
    fn shop_group_with_multistore_is_denied() {
        assert!(!checker(true, false, false).can_be_changed());
        assert!(!OptionsChecker::new(StaticFeature::new(true), ShopConstraint::shop_group(1))
            .can_be_changed());
    }

    #[test]
    fn contradictory_context_falls_through_to_all_shops() {
        assert!(checker(true, true, true).can_be_changed());
        assert!(checker(false, true, true).can_be_changed());
    }

    #[test]
    fn repeated_calls_agree() {
        for bits in 0u8..8 {
            let c = checker(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert_eq!(c.can_be_changed(), c.can_be_changed());
        }
    }

    #[test]
    fn multistore_off_skips_all_shops_lookup_for_single_shop() {
        #[derive(Debug, Default)]
        struct Counting {
            all_calls: AtomicU32,
        }

        impl ShopContextChecker for Counting {
            fn is_single_shop_context(&self) -> bool {
                true
            }

            fn is_all_shop_context(&self) -> bool {
                self.all_calls.fetch_add(1, Ordering::Relaxed);
                false
            }
        }

        let counting = Counting::default();
        let c = OptionsChecker::new(StaticFeature::new(false), &counting);
        assert!(c.can_be_changed());
        assert_eq!(counting.all_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn ensure_maps_denial_to_error() {
        assert!(checker(true, false, true).ensure_can_be_changed().is_ok());

        let err = checker(true, true, false).ensure_can_be_changed().unwrap_err();
        assert!(matches!(err, SecurityError::AccessDenied { .. }));
    }
}
