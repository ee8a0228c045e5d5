//! Diagnostic logger
//!
//! One process-wide sink for leveled text diagnostics. A [`Logger`] pairs an
//! immutable [`LoggerConfig`] with an `env_logger` backend whose format closure
//! renders every record through a [`ColorScheme`].
//!
//! Loggers can be used directly (and passed by reference to whatever emits
//! diagnostics), or installed once per process with [`install`] /
//! [`initialize`], after which the `log` macros route through the same sink.
//!
//! Single-threaded use is the supported contract. The underlying sink is
//! synchronized by `env_logger`, but no ordering guarantee is made across
//! threads.
//!
//! # Examples
//!
//! ```no_run
//! use preflight::logging::{self, Severity};
//!
//! let logger = logging::initialize(Some("info"), false).unwrap();
//! logger.emit(Severity::Info, "starting");
//! log::warn!("routed through the same sink");
//! ```

mod scheme;
mod severity;

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use env_logger::{Target, WriteStyle};
use log::{Log, Metadata, Record};

pub use scheme::{ColorScheme, LABEL_WIDTH, SeverityStyle, Style};
pub use severity::Severity;

use crate::error::{Error, Result};

const TARGET: &str = "preflight";

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Logger settings, fixed for the lifetime of a [`Logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    /// Minimum severity that is written
    pub threshold: Severity,
    /// Whether output is styled with the ANSI color scheme
    pub color: bool,
}

impl LoggerConfig {
    /// Create a config from an explicit threshold
    #[must_use]
    pub const fn new(threshold: Severity, color: bool) -> Self {
        Self { threshold, color }
    }

    /// Create a config from a user-supplied level name.
    ///
    /// See [`Severity::from_spec`] for how the name is interpreted.
    #[must_use]
    pub fn from_spec(spec: Option<&str>, color: bool) -> Self {
        Self::new(Severity::from_spec(spec), color)
    }

    /// Presentation used for this config
    #[must_use]
    pub const fn scheme(&self) -> ColorScheme {
        ColorScheme::for_color(self.color)
    }

    /// Whether a message of `severity` passes the threshold
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }
}

/// Leveled, optionally colored diagnostic sink
pub struct Logger {
    config: LoggerConfig,
    inner: env_logger::Logger,
}

impl Logger {
    /// Logger writing to stderr
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_target(config, Target::Stderr)
    }

    /// Logger writing to an arbitrary `env_logger` target
    #[must_use]
    pub fn with_target(config: LoggerConfig, target: Target) -> Self {
        let scheme = config.scheme();
        let write_style = if config.color {
            WriteStyle::Always
        } else {
            WriteStyle::Never
        };

        let inner = env_logger::Builder::new()
            .filter_level(config.threshold.into())
            .write_style(write_style)
            .target(target)
            .format(move |buf, record| {
                let severity = Severity::from(record.level());
                writeln!(buf, "{}", scheme.render(severity, &record.args().to_string()))
            })
            .build();

        Self { config, inner }
    }

    /// Settings this logger was built with
    #[must_use]
    pub const fn config(&self) -> LoggerConfig {
        self.config
    }

    /// Write `message` at `severity`, or do nothing if it is below the threshold.
    ///
    /// Write failures in the sink are swallowed.
    pub fn emit(&self, severity: Severity, message: &str) {
        if !self.config.enabled(severity) {
            return;
        }
        self.inner.log(
            &Record::builder()
                .level(severity.to_level())
                .target(TARGET)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    /// Emit at [`Severity::Debug`]
    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    /// Emit at [`Severity::Info`]
    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    /// Emit at [`Severity::Warn`]
    pub fn warn(&self, message: &str) {
        self.emit(Severity::Warn, message);
    }

    /// Emit at [`Severity::Error`]
    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Install `logger` as the process-wide sink and register it with `log`.
///
/// Only the first call succeeds. Later calls return
/// [`Error::AlreadyInitialized`], drop their logger and leave the installed
/// one untouched, so lines are never duplicated.
pub fn install(logger: Logger) -> Result<&'static Logger> {
    GLOBAL.set(logger).map_err(|_| Error::AlreadyInitialized)?;
    let logger = GLOBAL.get().ok_or(Error::AlreadyInitialized)?;
    log::set_logger(logger).map_err(|_| Error::AlreadyInitialized)?;
    log::set_max_level(logger.config.threshold.into());
    Ok(logger)
}

/// Build a stderr logger from a level name and install it.
pub fn initialize(spec: Option<&str>, color: bool) -> Result<&'static Logger> {
    install(Logger::new(LoggerConfig::from_spec(spec, color)))
}

/// The installed process-wide logger, if any
#[must_use]
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Emit through the process-wide logger.
///
/// Before [`initialize`] or [`install`] this is a no-op.
pub fn emit(severity: Severity, message: &str) {
    if let Some(logger) = global() {
        logger.emit(severity, message);
    }
}
