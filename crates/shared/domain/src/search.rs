use serde::{Deserialize, Serialize};

/// A search alias: typing `alias` in the storefront searches for `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub alias: String,
    pub search: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

impl Alias {
    pub fn new(alias: impl Into<String>, search: impl Into<String>) -> Self {
        Self { alias: alias.into(), search: search.into(), active: true }
    }
}

const fn active_by_default() -> bool {
    true
}
