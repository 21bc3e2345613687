//! Styled terminal output and the terminal notification sink.

use std::io::IsTerminal;

use crate::alert::{Level, Notifier};

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Status symbols, colored when the terminal supports it.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }
}

/// Prints notifications as styled alert lines on stderr.
#[derive(Default)]
pub struct TermNotifier {
    styled: Styled,
}

impl TermNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TermNotifier {
    fn notify(&self, level: Level, message: &str) {
        let symbol = match level {
            Level::Success => self.styled.ok_sym(),
            Level::Warning => self.styled.warn_sym(),
            Level::Danger => self.styled.fail_sym(),
        };
        eprintln!("  {symbol} {message}");
    }
}
