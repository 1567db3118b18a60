//! The closed set of visual themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named, mutually exclusive visual style.
///
/// Every theme maps to exactly one stylesheet file in the assets directory.
/// The declaration order is significant: [`Theme::ALL`] lists themes in the
/// order the selector shows them, and the first entry is the one corrupted
/// session values are coerced to.
///
/// # Example
///
/// ```rust
/// use themedash::Theme;
///
/// assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
/// assert_eq!(Theme::Dark.stylesheet_file(), "dark_theme.css");
/// assert_eq!(Theme::coerce("sepia"), Theme::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// All known themes, in selector order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The first known theme; the target of self-healing coercion.
    pub const FIRST: Theme = Theme::ALL[0];

    /// Human-readable label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Stable lowercase identifier used in forms and persisted state.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// File name of the stylesheet for this theme, relative to the assets dir.
    pub fn stylesheet_file(self) -> &'static str {
        match self {
            Theme::Light => "light_theme.css",
            Theme::Dark => "dark_theme.css",
        }
    }

    /// Parses a stored value, falling back to [`Theme::FIRST`] when the value
    /// is not a known theme.
    pub fn coerce(raw: &str) -> Theme {
        raw.parse().unwrap_or(Theme::FIRST)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::FIRST
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected one of: light, dark)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
