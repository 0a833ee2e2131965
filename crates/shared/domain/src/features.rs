use crate::constants::{ALIAS_SEARCH, MULTISTORE};
use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Optional subsystems enabled for a deployment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const MULTISTORE = 1 << 0;
        const ALIAS_SEARCH = 1 << 1;

        const ALL = Self::MULTISTORE.bits() | Self::ALIAS_SEARCH.bits();
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::ALIAS_SEARCH
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            MULTISTORE => Self::MULTISTORE,
            ALIAS_SEARCH => Self::ALIAS_SEARCH,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

/// Accepts either raw bits (`3`) or a list of names (`["multistore", "alias_search"]`).
/// Unknown names are ignored.
impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeatureSetVisitor;

        impl<'de> Visitor<'de> for FeatureSetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("feature bits or a list of feature names")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v).map(FeatureSet::from_bits_retain).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v).map(FeatureSet::from_bits_retain).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(FeatureSet::from(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = FeatureSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= FeatureSet::from(name.as_str());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(FeatureSetVisitor)
    }
}
