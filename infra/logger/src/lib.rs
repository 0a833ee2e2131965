//! # Logger
//!
//! Installs the global `tracing` subscriber of the Shopdesk binaries: a compact
//! console layer on stderr and an optional daily-rolling file layer, plain or JSON.
//!
//! Binaries call [`Logger::from_config`] with the `[logging]` section of the
//! configuration; [`Logger::builder`] exposes the same settings programmatically.
//! `RUST_LOG` applies unless an explicit `env_filter` is set.
//!
//! ## Example
//!
//! ```rust
//! # use shopdesk_domain::config::LoggingConfig;
//! # use shopdesk_logger::Logger;
//! let _logger = Logger::from_config("shopdesk", &LoggingConfig::default()).unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use shopdesk_domain::config::LoggingConfig;
use std::borrow::Cow;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_FILE_SUFFIX: &str = "log";

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Builder of the global subscriber.
///
/// File options (`max_files`, `json`) only exist once a directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    name: N,
    level: LevelFilter,
    settings: LoggingConfig,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also the prefix of the log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            settings: self.settings,
            output: PhantomData,
        }
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// Number of rotated files kept in the directory.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes JSON lines instead of plain text to the log files.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit filter directives (e.g. `shopdesk_kernel=trace,config=warn`), replacing
    /// `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Directory of the daily-rolling log files.
    pub fn directory(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.directory = Some(dir.into());
        LoggerBuilder { name: self.name, level: self.level, settings, output: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer guard.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, a bad filter, zero
    /// `max_files` or no enabled output, and [`LoggerError::Subscriber`] if a global
    /// subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        if name.trim().is_empty() {
            return Err(invalid("Logger name cannot be empty"));
        }

        let filter = env_filter(self.level, self.settings.env_filter.as_deref())?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.settings.console {
            layers.push(console_layer());
        }
        let guard = match &self.settings.directory {
            Some(dir) => {
                let (layer, guard) = file_layer(&name, dir, &self.settings)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(invalid("No logging layers enabled. Enable console or file output."));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle of the installed subscriber; dropping it flushes and stops the file writer.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            level: LevelFilter::INFO,
            settings: LoggingConfig::default(),
            output: PhantomData,
        }
    }

    /// Installs the global subscriber described by a `[logging]` configuration section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name, plus every
    /// error of [`LoggerBuilder::init`].
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let builder = Self::builder().name(name).level(parse_level(&config.level)?);
        LoggerBuilder { settings: config.clone(), ..builder }.init()
    }

    /// The file writer guard, present when a log directory is configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

/// Parses `"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"` (any case).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim())
        .map_err(|e| invalid(format!("Invalid log level '{level}': {e}")))
}

fn invalid(message: impl Into<Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        Some(directives) => builder
            .parse(directives)
            .map_err(|e| invalid(format!("Invalid env filter '{directives}': {e}"))),
        None => Ok(builder.from_env_lossy()),
    }
}

fn console_layer() -> BoxedLayer {
    fmt::layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed()
}

fn file_layer(
    name: &str,
    dir: &Path,
    settings: &LoggingConfig,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    if settings.max_files == 0 {
        return Err(invalid("max_files must be greater than zero"));
    }
    fs::create_dir_all(dir).context(format!("Failed to create path: {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if settings.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn builder_starts_from_logging_defaults() {
        let builder = Logger::builder().name("shopdesk-test").env_filter("shopdesk=debug");
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.settings.console);
        assert!(builder.settings.directory.is_none());
        assert_eq!(builder.settings.env_filter.as_deref(), Some("shopdesk=debug"));
    }

    #[test]
    fn file_options_follow_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempdir()?;
        let log_dir = tmp_dir.path().join("logs");
        let builder = Logger::builder()
            .name("shopdesk-test")
            .console(false)
            .level(LevelFilter::DEBUG)
            .directory(log_dir.clone())
            .max_files(5)
            .json(true);

        assert!(!builder.settings.console);
        assert!(builder.settings.json);
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.settings.max_files, 5);
        assert_eq!(builder.settings.directory.as_deref(), Some(log_dir.as_path()));
        Ok(())
    }

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn bad_filter_directive_is_rejected() {
        assert!(matches!(
            env_filter(LevelFilter::INFO, Some("shopdesk=loud")),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    #[serial]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn no_layers_is_rejected() {
        let err = Logger::builder().name("shopdesk-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder()
            .name("shopdesk-test")
            .directory(std::env::temp_dir())
            .max_files(0)
            .init()
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
