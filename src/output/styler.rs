//! Plain or ANSI-colored text styling

use crate::constants::output::UNAVAILABLE;
use colored::{ColoredString, Colorize};

/// Applies edison's color scheme, or nothing when colors are disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A styler that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
        if self.enabled {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Section titles and summary lines
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.green().bold())
    }

    /// Repository, organization and language names
    pub fn name(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan().bold())
    }

    /// Field labels such as `Email:`
    pub fn label(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    /// Secondary details like URLs
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed())
    }

    /// ASCII art banner lines
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |s| s.magenta())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red().bold())
    }

    pub fn bullet(&self) -> String {
        self.paint("•", |s| s.blue())
    }

    /// Marker printed where a value could not be fetched
    pub fn unavailable(&self) -> String {
        self.warning(UNAVAILABLE)
    }
}
