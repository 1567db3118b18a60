//! The theme-aware page host.
//!
//! [`ThemeHost`] owns the mapping from theme to stylesheet and the rules for
//! reading, changing and applying a session's theme. It never fails: missing
//! stylesheets become notices on the [`Frame`] and the style scope keeps
//! whatever it held before.

use tracing::{debug, warn};

use crate::assets::{AssetDir, GLOBAL_STYLESHEET};
use crate::frame::Frame;
use crate::session::Session;
use crate::style::{StyleError, StyleScope, GLOBAL_STYLE_ID, THEME_STYLE_ID};
use crate::theme::{select, DefaultTheme, Selection, Theme};

#[derive(Debug, Clone)]
pub struct ThemeHost {
    assets: AssetDir,
    default_theme: DefaultTheme,
}

impl ThemeHost {
    pub fn new(assets: AssetDir, default_theme: DefaultTheme) -> Self {
        Self {
            assets,
            default_theme,
        }
    }

    pub fn assets(&self) -> &AssetDir {
        &self.assets
    }

    /// Theme a brand-new session starts with.
    pub fn initial_theme(&self) -> Theme {
        self.default_theme.resolve()
    }

    /// Returns the session's theme, rewriting an unrecognized stored value to
    /// the first known theme.
    pub fn get_active_theme(&self, session: &mut Session) -> Theme {
        let theme = Theme::coerce(session.selected_theme_raw());
        if session.selected_theme() != Some(theme) {
            warn!(
                session = %session.id(),
                stored = session.selected_theme_raw(),
                "unrecognized theme in session, resetting to {}",
                theme
            );
            session.set_theme(theme);
        }
        theme
    }

    /// Records a user's theme choice.
    ///
    /// Returns [`Selection::Unchanged`] when the requested theme is already
    /// active. An unrecognized stored value is still healed to the first
    /// theme first, so `Unchanged` can come with that one session write.
    pub fn on_theme_selected(&self, session: &mut Session, requested: Theme) -> Selection {
        let current = self.get_active_theme(session);
        let selection = select(current, requested);
        if let Selection::Changed(next) = selection {
            session.set_theme(next);
            debug!(session = %session.id(), from = %current, to = %next, "theme changed");
        }
        selection
    }

    /// Injects the global stylesheet under [`GLOBAL_STYLE_ID`].
    pub fn apply_global(&self, scope: &mut StyleScope, frame: &mut Frame) {
        match self.assets.read_stylesheet(GLOBAL_STYLESHEET) {
            Ok(sheet) => {
                scope.inject(GLOBAL_STYLE_ID, sheet);
                debug!("applied global stylesheet");
            }
            Err(err) => {
                let message = match &err {
                    StyleError::NotFound { path } => {
                        format!("Global stylesheet not found: {}", path.display())
                    }
                    StyleError::Read { .. } => format!("Global {}", err),
                };
                warn!(error = %err, "global stylesheet unavailable");
                frame.warn(message);
            }
        }
    }

    /// Injects the stylesheet for `theme` under [`THEME_STYLE_ID`], replacing
    /// any previously injected theme sheet.
    pub fn apply_theme(&self, theme: Theme, scope: &mut StyleScope, frame: &mut Frame) {
        match self.assets.read_stylesheet(theme.stylesheet_file()) {
            Ok(sheet) => {
                scope.inject(THEME_STYLE_ID, sheet);
                debug!(theme = %theme, "applied theme stylesheet");
            }
            Err(err) => {
                let message = match &err {
                    StyleError::NotFound { path } => format!(
                        "{} theme stylesheet not found: {}",
                        theme.label(),
                        path.display()
                    ),
                    StyleError::Read { .. } => format!("{} theme {}", theme.label(), err),
                };
                warn!(theme = %theme, error = %err, "theme stylesheet unavailable");
                frame.warn(message);
            }
        }
    }

    /// Applies the global sheet, then the session's active theme sheet, into
    /// the session's style scope.
    pub fn apply_session_styles(&self, session: &mut Session, frame: &mut Frame) -> Theme {
        let theme = self.get_active_theme(session);
        self.apply_global(session.styles_mut(), frame);
        self.apply_theme(theme, session.styles_mut(), frame);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PageIcon;
    use crate::config::{Layout, SidebarState};
    use crate::frame::PageConfig;
    use std::fs;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn frame() -> Frame {
        Frame::new(PageConfig {
            title: "test".into(),
            icon: PageIcon::glyph("x"),
            layout: Layout::Wide,
            sidebar: SidebarState::Expanded,
        })
    }

    fn host_with(files: &[(&str, &str)]) -> (TempDir, ThemeHost) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let host = ThemeHost::new(
            AssetDir::new(dir.path(), "icon.png"),
            DefaultTheme::default(),
        );
        (dir, host)
    }

    #[test]
    fn test_active_theme_heals_corrupt_value() {
        let (_dir, host) = host_with(&[]);
        let mut session: Session = serde_json::from_str(&format!(
            r#"{{"id":"{}","selected_theme":"purple"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();

        assert_eq!(host.get_active_theme(&mut session), Theme::Light);
        assert_eq!(session.selected_theme_raw(), "light");
    }

    #[test]
    fn test_active_theme_keeps_parseable_value() {
        let (_dir, host) = host_with(&[]);
        let mut session = Session::new(Uuid::new_v4(), Theme::Dark);
        let before = session.clone();

        assert_eq!(host.get_active_theme(&mut session), Theme::Dark);
        assert_eq!(session, before);
    }

    #[test]
    fn test_select_first_theme_on_corrupt_session_heals_as_unchanged() {
        let (_dir, host) = host_with(&[]);
        let mut session: Session = serde_json::from_str(&format!(
            r#"{{"id":"{}","selected_theme":"Escuro"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();

        let selection = host.on_theme_selected(&mut session, Theme::Light);

        assert_eq!(selection, Selection::Unchanged);
        assert!(!selection.needs_rerender());
        assert_eq!(session.selected_theme_raw(), "light");
    }

    #[test]
    fn test_reselect_same_theme_is_noop() {
        let (_dir, host) = host_with(&[]);
        let mut session = Session::new(Uuid::new_v4(), Theme::Dark);
        let before = session.clone();

        assert_eq!(
            host.on_theme_selected(&mut session, Theme::Dark),
            Selection::Unchanged
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_select_other_theme_updates_session() {
        let (_dir, host) = host_with(&[]);
        let mut session = Session::new(Uuid::new_v4(), Theme::Light);

        let selection = host.on_theme_selected(&mut session, Theme::Dark);
        assert_eq!(selection, Selection::Changed(Theme::Dark));
        assert_eq!(session.selected_theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_apply_theme_replaces_previous() {
        let (_dir, host) = host_with(&[
            ("light_theme.css", "/* light */"),
            ("dark_theme.css", "/* dark */"),
        ]);
        let mut scope = StyleScope::new();
        let mut frame = frame();

        host.apply_theme(Theme::Light, &mut scope, &mut frame);
        host.apply_theme(Theme::Dark, &mut scope, &mut frame);

        assert_eq!(scope.len(), 1);
        assert_eq!(scope.get(THEME_STYLE_ID), Some("/* dark */"));
        assert!(frame.notices().is_empty());
    }

    #[test]
    fn test_apply_theme_missing_keeps_prior_styling() {
        let (_dir, host) = host_with(&[("light_theme.css", "/* light */")]);
        let mut scope = StyleScope::new();
        let mut frame = frame();

        host.apply_theme(Theme::Light, &mut scope, &mut frame);
        host.apply_theme(Theme::Dark, &mut scope, &mut frame);

        assert_eq!(scope.get(THEME_STYLE_ID), Some("/* light */"));
        assert_eq!(frame.notices().len(), 1);
        assert!(frame.notices()[0]
            .message
            .starts_with("Dark theme stylesheet not found:"));
    }

    #[test]
    fn test_global_applied_before_theme() {
        let (_dir, host) = host_with(&[
            ("style.css", "/* global */"),
            ("light_theme.css", "/* light */"),
        ]);
        let mut session = Session::new(Uuid::new_v4(), Theme::Light);
        let mut frame = frame();

        let theme = host.apply_session_styles(&mut session, &mut frame);

        assert_eq!(theme, Theme::Light);
        let ids: Vec<&str> = session.styles().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![GLOBAL_STYLE_ID, THEME_STYLE_ID]);
    }

    #[test]
    fn test_missing_global_warns() {
        let (_dir, host) = host_with(&[]);
        let mut scope = StyleScope::new();
        let mut frame = frame();

        host.apply_global(&mut scope, &mut frame);

        assert!(scope.is_empty());
        assert!(frame.notices()[0]
            .message
            .starts_with("Global stylesheet not found:"));
    }
}
