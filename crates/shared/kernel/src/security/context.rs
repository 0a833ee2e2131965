use crate::domain::shop::ShopConstraint;
use std::sync::Arc;

/// Describes the shop scope of the current operation.
///
/// The two predicates are queried independently. Implementations are expected to
/// never report both, but nothing here relies on it.
pub trait ShopContextChecker: Send + Sync {
    fn is_single_shop_context(&self) -> bool;

    fn is_all_shop_context(&self) -> bool;

    /// Neither a single shop nor every shop.
    fn is_group_shop_context(&self) -> bool {
        !self.is_single_shop_context() && !self.is_all_shop_context()
    }
}

impl ShopContextChecker for ShopConstraint {
    fn is_single_shop_context(&self) -> bool {
        self.is_single_shop()
    }

    fn is_all_shop_context(&self) -> bool {
        self.is_all_shops()
    }

    fn is_group_shop_context(&self) -> bool {
        self.is_shop_group()
    }
}

impl<T: ShopContextChecker + ?Sized> ShopContextChecker for &T {
    fn is_single_shop_context(&self) -> bool {
        (**self).is_single_shop_context()
    }

    fn is_all_shop_context(&self) -> bool {
        (**self).is_all_shop_context()
    }

    fn is_group_shop_context(&self) -> bool {
        (**self).is_group_shop_context()
    }
}

impl<T: ShopContextChecker + ?Sized> ShopContextChecker for Arc<T> {
    fn is_single_shop_context(&self) -> bool {
        (**self).is_single_shop_context()
    }

    fn is_all_shop_context(&self) -> bool {
        (**self).is_all_shop_context()
    }

    fn is_group_shop_context(&self) -> bool {
        (**self).is_group_shop_context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_constraint_answers_each_predicate() {
        let single = ShopConstraint::shop(1);
        assert!(single.is_single_shop_context());
        assert!(!single.is_all_shop_context());
        assert!(!single.is_group_shop_context());

        let group = ShopConstraint::shop_group(1);
        assert!(!group.is_single_shop_context());
        assert!(!group.is_all_shop_context());
        assert!(group.is_group_shop_context());

        let all = ShopConstraint::AllShops;
        assert!(!all.is_single_shop_context());
        assert!(all.is_all_shop_context());
        assert!(!all.is_group_shop_context());
    }
}
