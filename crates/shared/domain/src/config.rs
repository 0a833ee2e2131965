use crate::administration::AdministrationSettings;
use crate::features::FeatureSet;
use crate::search::Alias;
use crate::shop::ShopConstraint;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across the back office.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopdeskConfigInner {
    pub features: FeatureSet,
    pub shop: ShopConfig,
    pub multistore: MultistoreConfig,
    pub logging: LoggingConfig,
    pub administration: AdministrationSettings,
    pub search: SearchConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ShopdeskConfig {
    #[serde(flatten, default)]
    inner: Arc<ShopdeskConfigInner>,
}

impl Deref for ShopdeskConfig {
    type Target = ShopdeskConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShopdeskConfig {
    fn deref_mut(&mut self) -> &mut ShopdeskConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Storefront transport settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub name: String,
    pub ssl_enabled: bool,
}

/// Multistore scope used when a caller does not pick one explicitly.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MultistoreConfig {
    pub default_context: ShopConstraint,
}

/// Console and rolling-file logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    pub env_filter: Option<String>,
}

/// Alias search settings and the seed aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
    pub aliases: Vec<Alias>,
}

// --- Default ---

impl Default for ShopConfig {
    fn default() -> Self {
        Self { name: "Shopdesk".to_owned(), ssl_enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: 10,
            env_filter: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 10, aliases: Vec::new() }
    }
}
