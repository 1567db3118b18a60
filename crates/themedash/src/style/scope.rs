//! Injected stylesheets keyed by a stable identifier.

use serde::{Deserialize, Serialize};

/// Identifier of the global stylesheet, applied before any theme sheet.
pub const GLOBAL_STYLE_ID: &str = "global-style";

/// Identifier shared by every theme stylesheet, so switching themes replaces
/// rather than accumulates.
pub const THEME_STYLE_ID: &str = "theme-style";

/// A stylesheet's text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub css: String,
}

impl Stylesheet {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }
}

/// A stylesheet placed into a scope under an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectedStyle {
    pub id: String,
    pub css: String,
}

/// The active style rules of a page, in cascade order.
///
/// Injecting under an identifier that is already present replaces that
/// entry's content and keeps its position; new identifiers are appended.
///
/// ```rust
/// use themedash::style::{Stylesheet, StyleScope};
///
/// let mut scope = StyleScope::new();
/// scope.inject("theme-style", Stylesheet::new("body { color: black; }"));
/// scope.inject("theme-style", Stylesheet::new("body { color: white; }"));
///
/// assert_eq!(scope.len(), 1);
/// assert_eq!(scope.get("theme-style"), Some("body { color: white; }"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleScope {
    entries: Vec<InjectedStyle>,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects a stylesheet, replacing any content under the same identifier.
    pub fn inject(&mut self, id: &str, sheet: Stylesheet) {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.css = sheet.css,
            None => self.entries.push(InjectedStyle {
                id: id.to_string(),
                css: sheet.css,
            }),
        }
    }

    /// Returns the content injected under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.css.as_str())
    }

    /// Iterates entries in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &InjectedStyle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_appends_new_ids_in_order() {
        let mut scope = StyleScope::new();
        scope.inject(GLOBAL_STYLE_ID, Stylesheet::new("g"));
        scope.inject(THEME_STYLE_ID, Stylesheet::new("t"));

        let ids: Vec<&str> = scope.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![GLOBAL_STYLE_ID, THEME_STYLE_ID]);
    }

    #[test]
    fn test_reinject_keeps_position() {
        let mut scope = StyleScope::new();
        scope.inject(GLOBAL_STYLE_ID, Stylesheet::new("g1"));
        scope.inject(THEME_STYLE_ID, Stylesheet::new("light"));
        scope.inject(GLOBAL_STYLE_ID, Stylesheet::new("g2"));

        let entries: Vec<_> = scope.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, GLOBAL_STYLE_ID);
        assert_eq!(entries[0].css, "g2");
        assert_eq!(entries[1].css, "light");
    }

    #[test]
    fn test_get_missing() {
        let scope = StyleScope::new();
        assert!(scope.is_empty());
        assert_eq!(scope.get(THEME_STYLE_ID), None);
    }
}
