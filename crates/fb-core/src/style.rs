//! Terminal styling for output lines, with NO_COLOR support.

use std::str::FromStr;

use fb_sequence::Classification;
use serde::Deserialize;

/// Check if color output is allowed by the environment (respects `NO_COLOR`).
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// When to color the Fizz/Buzz words.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// Line style helper. Disabled styles emit no escape codes at all.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    /// Resolve a mode against the output stream and the environment.
    pub fn for_mode(mode: ColorMode, is_tty: bool) -> Self {
        Self::resolve(mode, is_tty, !color_enabled())
    }

    fn resolve(mode: ColorMode, is_tty: bool, no_color: bool) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && !no_color,
        };
        Self { enabled }
    }

    /// Create a style with colors explicitly enabled (for tests).
    pub fn force_enabled() -> Self {
        Self { enabled: true }
    }

    /// Create a style with colors explicitly disabled.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Opening escape for a class. Plain numbers are never colored.
    pub fn class_start(&self, class: &Classification) -> &'static str {
        if !self.enabled {
            return "";
        }
        match class {
            Classification::Fizz => "\x1b[36m",
            Classification::Buzz => "\x1b[33m",
            Classification::FizzBuzz => "\x1b[1m\x1b[32m",
            Classification::Number(_) => "",
        }
    }

    /// Closing escape matching [`Style::class_start`].
    pub fn class_end(&self, class: &Classification) -> &'static str {
        if self.class_start(class).is_empty() {
            ""
        } else {
            "\x1b[0m"
        }
    }
}
