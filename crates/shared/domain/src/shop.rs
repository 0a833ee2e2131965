use crate::constants::DEFAULT_SHOP_ID;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub u32);

/// Identifier of a group of shops sharing some data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopGroupId(pub u32);

/// The scope an administrative operation applies to.
///
/// Exactly one scope is active at a time, so the single-shop and all-shops
/// predicates can never both hold for a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "snake_case")]
pub enum ShopConstraint {
    Shop(ShopId),
    ShopGroup(ShopGroupId),
    AllShops,
}

impl ShopConstraint {
    #[must_use]
    pub const fn shop(id: u32) -> Self {
        Self::Shop(ShopId(id))
    }

    #[must_use]
    pub const fn shop_group(id: u32) -> Self {
        Self::ShopGroup(ShopGroupId(id))
    }

    #[must_use]
    pub const fn all_shops() -> Self {
        Self::AllShops
    }

    #[must_use]
    pub const fn is_single_shop(&self) -> bool {
        matches!(self, Self::Shop(_))
    }

    #[must_use]
    pub const fn is_shop_group(&self) -> bool {
        matches!(self, Self::ShopGroup(_))
    }

    #[must_use]
    pub const fn is_all_shops(&self) -> bool {
        matches!(self, Self::AllShops)
    }

    /// The shop targeted by this scope, if it targets exactly one.
    #[must_use]
    pub const fn shop_id(&self) -> Option<ShopId> {
        match self {
            Self::Shop(id) => Some(*id),
            _ => None,
        }
    }
}

impl Default for ShopConstraint {
    fn default() -> Self {
        Self::shop(DEFAULT_SHOP_ID)
    }
}

impl fmt::Display for ShopConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shop(ShopId(id)) => write!(f, "shop:{id}"),
            Self::ShopGroup(ShopGroupId(id)) => write!(f, "shop_group:{id}"),
            Self::AllShops => f.write_str("all_shops"),
        }
    }
}
