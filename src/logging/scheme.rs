//! Per-severity presentation
//!
//! A [`ColorScheme`] maps every [`Severity`] to a label style and a body
//! style. Styles render to explicit ANSI start and reset codes, so output does
//! not depend on `colored`'s own terminal detection. The plain scheme uses
//! empty styles throughout and never emits an escape sequence.

use std::borrow::Cow;

use colored::Color;

use super::severity::Severity;

/// Width of the level name inside the bracketed label
pub const LABEL_WIDTH: usize = 7;

const RESET: &str = "\x1b[0m";

/// A text style: an optional foreground color and optional bold weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bold: bool,
}

impl Style {
    /// The empty style
    pub const PLAIN: Self = Self {
        fg: None,
        bold: false,
    };

    /// Foreground color only
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bold: false,
        }
    }

    /// Same style, bold
    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Whether this style renders nothing
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold
    }

    /// Escape sequence that opens the style, empty for the plain style
    #[must_use]
    pub fn start_code(&self) -> String {
        if self.is_plain() {
            return String::new();
        }
        let mut codes: Vec<Cow<'static, str>> = Vec::with_capacity(2);
        if self.bold {
            codes.push(Cow::Borrowed("1"));
        }
        if let Some(color) = self.fg {
            codes.push(color.to_fg_str());
        }
        format!("\x1b[{}m", codes.join(";"))
    }

    /// Escape sequence that closes the style, empty for the plain style
    #[must_use]
    pub const fn reset_code(&self) -> &'static str {
        if self.is_plain() { "" } else { RESET }
    }

    /// Wrap `text` in this style
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("{}{text}{}", self.start_code(), self.reset_code())
    }
}

/// Label and body style for one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Style of the bracketed level label
    pub label: Style,
    /// Style of the message text
    pub body: Style,
}

impl SeverityStyle {
    const PLAIN: Self = Self {
        label: Style::PLAIN,
        body: Style::PLAIN,
    };
}

/// Total mapping from severity to presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    debug: SeverityStyle,
    info: SeverityStyle,
    warn: SeverityStyle,
    error: SeverityStyle,
}

impl ColorScheme {
    /// Terminal colors
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            debug: SeverityStyle {
                label: Style::fg(Color::Cyan).bold(),
                body: Style::fg(Color::BrightBlack),
            },
            info: SeverityStyle {
                label: Style::fg(Color::Green).bold(),
                body: Style::fg(Color::White),
            },
            warn: SeverityStyle {
                label: Style::fg(Color::Yellow).bold(),
                body: Style::fg(Color::Yellow),
            },
            error: SeverityStyle {
                label: Style::fg(Color::Red).bold(),
                body: Style::fg(Color::Red),
            },
        }
    }

    /// No styling at all
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            debug: SeverityStyle::PLAIN,
            info: SeverityStyle::PLAIN,
            warn: SeverityStyle::PLAIN,
            error: SeverityStyle::PLAIN,
        }
    }

    /// [`ColorScheme::ansi`] when `enabled`, otherwise [`ColorScheme::plain`]
    #[must_use]
    pub const fn for_color(enabled: bool) -> Self {
        if enabled { Self::ansi() } else { Self::plain() }
    }

    /// Styles for `severity`
    #[must_use]
    pub const fn get(&self, severity: Severity) -> SeverityStyle {
        match severity {
            Severity::Debug => self.debug,
            Severity::Info => self.info,
            Severity::Warn => self.warn,
            Severity::Error => self.error,
        }
    }

    /// Render one diagnostic line, without the trailing newline
    #[must_use]
    pub fn render(&self, severity: Severity, message: &str) -> String {
        let style = self.get(severity);
        let label = format!("[{:<LABEL_WIDTH$}]", severity.label());
        format!("{} {}", style.label.paint(&label), style.body.paint(message))
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::ansi()
    }
}
