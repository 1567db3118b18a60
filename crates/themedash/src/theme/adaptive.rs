//! Initial theme policy, optionally following the OS color mode.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};

use super::theme::{Theme, UnknownTheme};

/// The theme a brand-new session starts with.
///
/// `System` asks the host OS for its preferred color mode when the session is
/// created. Existing sessions never change theme on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultTheme {
    /// Always start with this theme.
    Fixed(Theme),
    /// Start with the theme matching the OS color mode.
    System,
}

impl DefaultTheme {
    /// Resolves the policy to a concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            DefaultTheme::Fixed(theme) => theme,
            DefaultTheme::System => detect_theme(),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        DefaultTheme::Fixed(Theme::FIRST)
    }
}

impl fmt::Display for DefaultTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultTheme::Fixed(theme) => f.write_str(theme.key()),
            DefaultTheme::System => f.write_str("system"),
        }
    }
}

impl FromStr for DefaultTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("system") {
            return Ok(DefaultTheme::System);
        }
        s.parse().map(DefaultTheme::Fixed)
    }
}

impl<'de> Deserialize<'de> for DefaultTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

type ThemeDetector = fn() -> Theme;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`DefaultTheme::System`].
///
/// This is useful for testing or for hosts where OS detection is meaningless.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub(crate) fn detect_theme() -> Theme {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> Theme {
    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        _ => Theme::Light,
    }
}
