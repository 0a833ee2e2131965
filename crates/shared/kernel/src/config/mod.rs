use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of the environment variables overriding file settings.
pub const ENV_PREFIX: &str = "SHOPDESK";
/// File stem looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "shopdesk";

/// Custom error type for config loading.
#[shopdesk_derive::shopdesk_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file and environment overrides.
///
/// 1. **Base File**: settings from `path` (TOML, YAML or JSON by extension). When no
///    path is given, `shopdesk.{toml,yaml,json}` is looked up in the working directory
///    and skipped if absent, so a bare environment still yields defaults.
/// 2. **Environment Overrides**: variables prefixed with `SHOPDESK__`, nested with
///    double underscores (`SHOPDESK__SHOP__SSL_ENABLED=false` maps to `shop.ssl_enabled`).
///
/// # Errors
/// Returns an error if an explicit file is missing, a value cannot be parsed, or the
/// merged settings do not match `T`.
///
/// # Example
/// ```rust
/// use shopdesk_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!("Loading config from {}", file.display());

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Parses a configuration from an in-memory TOML document, without environment overrides.
///
/// # Errors
/// Returns an error if the document is not valid TOML or does not match `T`.
pub fn parse_toml<T>(raw: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from_str(raw, FileFormat::Toml))
        .build()
        .context("Failed to parse config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
