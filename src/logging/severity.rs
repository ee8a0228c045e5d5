//! Diagnostic severity levels
//!
//! Severities are totally ordered, `Debug < Info < Warn < Error`. The same
//! order drives threshold filtering and style selection.

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Developer detail, hidden unless explicitly requested
    Debug,
    /// Progress information
    Info,
    /// Something looks wrong but execution continues
    #[default]
    Warn,
    /// Something failed
    Error,
}

impl Severity {
    /// Every severity, lowest first
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Upper-case label used in rendered output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Map a user-supplied verbosity name to a threshold.
    ///
    /// Matching is case-insensitive. Only `debug` and `info` raise verbosity;
    /// anything else, including no value at all, yields [`Severity::Warn`].
    #[must_use]
    pub fn from_spec(spec: Option<&str>) -> Self {
        match spec.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("debug") => Self::Debug,
            Some("info") => Self::Info,
            _ => Self::Warn,
        }
    }

    /// The equivalent `log` crate level
    #[must_use]
    pub const fn to_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        severity.to_level().to_level_filter()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
