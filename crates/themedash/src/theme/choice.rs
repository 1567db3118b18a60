//! Theme selection transitions.

use super::theme::Theme;

/// Outcome of a theme selection.
///
/// The hosting layer answers [`Selection::Changed`] with a full re-render
/// and [`Selection::Unchanged`] with nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The requested theme is already active.
    Unchanged,
    /// The active theme moved to the contained value.
    Changed(Theme),
}

impl Selection {
    /// Returns true when a re-render is required.
    pub fn needs_rerender(self) -> bool {
        matches!(self, Selection::Changed(_))
    }
}

/// Computes the next theme state from the current one and a user request.
///
/// This is the whole state machine: two states and one transition rule.
/// It has no side effects.
///
/// ```rust
/// use themedash::{select, Selection, Theme};
///
/// assert_eq!(select(Theme::Light, Theme::Light), Selection::Unchanged);
/// assert_eq!(select(Theme::Light, Theme::Dark), Selection::Changed(Theme::Dark));
/// ```
pub fn select(current: Theme, requested: Theme) -> Selection {
    if current == requested {
        Selection::Unchanged
    } else {
        Selection::Changed(requested)
    }
}
