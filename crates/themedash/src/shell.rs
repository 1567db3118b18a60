//! Full-page composition.
//!
//! [`Shell::render`] runs one render for one session:
//!
//! 1. Resolve page config (title, icon, layout), warning on a missing icon
//! 2. Inject the global stylesheet, then the active theme's stylesheet
//! 3. Build the sidebar (theme selector, navigation, action buttons)
//! 4. Halt here if a sidebar action was pressed
//! 5. Otherwise render the page body into the layout

use std::fmt;
use std::str::FromStr;

use minijinja::Value;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assets::PageIcon;
use crate::config::{AppConfig, Layout, SidebarState};
use crate::error::Error;
use crate::frame::{Frame, Notice, PageConfig};
use crate::host::ThemeHost;
use crate::pages::{Page, PageContext, PageRegistry};
use crate::render::{Renderer, LAYOUT_TEMPLATE};
use crate::session::Session;
use crate::style::InjectedStyle;
use crate::theme::Theme;

/// Non-functional navigation entries shown under the page links.
pub const PLACEHOLDER_ENTRIES: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Sidebar buttons. Each one stops the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Exit,
    Back,
    Help,
}

impl SidebarAction {
    pub const ALL: [SidebarAction; 3] = [SidebarAction::Exit, SidebarAction::Back, SidebarAction::Help];

    pub fn key(self) -> &'static str {
        match self {
            SidebarAction::Exit => "exit",
            SidebarAction::Back => "back",
            SidebarAction::Help => "help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SidebarAction::Exit => "Exit",
            SidebarAction::Back => "Back",
            SidebarAction::Help => "Help",
        }
    }
}

impl fmt::Display for SidebarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string does not name a sidebar action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sidebar action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for SidebarAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SidebarAction::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// The output of one render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub theme: Theme,
    pub notices: Vec<Notice>,
    pub halted: bool,
}

#[derive(Serialize)]
struct ThemeOption {
    key: &'static str,
    label: &'static str,
    checked: bool,
}

#[derive(Serialize)]
struct NavLink {
    href: String,
    title: &'static str,
    current: bool,
}

#[derive(Serialize)]
struct ActionButton {
    key: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct LayoutView<'a> {
    title: &'a str,
    icon_glyph: Option<&'a str>,
    layout: &'static str,
    sidebar_state: &'static str,
    theme: ThemeOption,
    themes: Vec<ThemeOption>,
    styles: Vec<&'a InjectedStyle>,
    notices: &'a [Notice],
    route: &'static str,
    nav: Vec<NavLink>,
    placeholders: [&'static str; 3],
    actions: Vec<ActionButton>,
    sidebar_header: Option<&'static str>,
    halted: bool,
    body_template: &'static str,
    page: Value,
}

/// Composes pages around the theme host.
#[derive(Debug)]
pub struct Shell {
    host: ThemeHost,
    pages: PageRegistry,
    renderer: Renderer,
    site_title: String,
    layout: Layout,
    sidebar: SidebarState,
}

impl Shell {
    /// Builds a shell with the default pages and built-in templates.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        Ok(Self {
            host: ThemeHost::new(config.assets(), config.default_theme),
            pages: PageRegistry::with_defaults(),
            renderer: Renderer::new()?,
            site_title: config.page_title.clone(),
            layout: config.layout,
            sidebar: config.sidebar,
        })
    }

    pub fn host(&self) -> &ThemeHost {
        &self.host
    }

    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// Renders `route` for `session`.
    ///
    /// A sidebar `action` halts the render after the sidebar, so the page
    /// body is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPage`] for unregistered routes (before the
    /// session is touched) and [`Error::Template`] if a template fails.
    pub fn render(
        &self,
        route: &str,
        session: &mut Session,
        action: Option<SidebarAction>,
    ) -> Result<RenderedPage, Error> {
        let page = self
            .pages
            .get(route)
            .ok_or_else(|| Error::UnknownPage(route.to_string()))?;

        let mut frame = Frame::new(self.page_config(page));
        if page.icon.is_none() && frame.config.icon.is_fallback() {
            let path = self.host.assets().icon_path();
            warn!(path = %path.display(), "icon not found, using fallback glyph");
            frame.warn(format!(
                "Icon not found at {}. Using default glyph.",
                path.display()
            ));
        }

        let theme = self.host.apply_session_styles(session, &mut frame);

        if let Some(action) = action {
            info!(session = %session.id(), %action, route, "render halted by sidebar action");
            frame.halt();
        }

        let body = if frame.is_halted() {
            None
        } else {
            Some((page.render)(&PageContext { theme }))
        };

        let view = LayoutView {
            title: &frame.config.title,
            icon_glyph: match &frame.config.icon {
                PageIcon::Glyph(glyph) => Some(glyph.as_str()),
                PageIcon::Image { .. } => None,
            },
            layout: frame.config.layout.as_str(),
            sidebar_state: frame.config.sidebar.as_str(),
            theme: theme_option(theme, theme),
            themes: Theme::ALL.iter().map(|t| theme_option(*t, theme)).collect(),
            styles: session.styles().iter().collect(),
            notices: frame.notices(),
            route: page.route,
            nav: self
                .pages
                .iter()
                .map(|p| NavLink {
                    href: p.href(),
                    title: p.label,
                    current: p.route == page.route,
                })
                .collect(),
            placeholders: PLACEHOLDER_ENTRIES,
            actions: SidebarAction::ALL
                .iter()
                .map(|a| ActionButton {
                    key: a.key(),
                    label: a.label(),
                })
                .collect(),
            sidebar_header: body.as_ref().and_then(|b| b.sidebar_header),
            halted: frame.is_halted(),
            body_template: body.as_ref().map(|b| b.template).unwrap_or_default(),
            page: body.map(|b| b.context).unwrap_or(Value::UNDEFINED),
        };

        let html = self.renderer.render(LAYOUT_TEMPLATE, &view)?;
        debug!(session = %session.id(), route, theme = %theme, "page rendered");

        Ok(RenderedPage {
            html,
            theme,
            notices: frame.notices().to_vec(),
            halted: frame.is_halted(),
        })
    }

    fn page_config(&self, page: &Page) -> PageConfig {
        PageConfig {
            title: page
                .title
                .map(str::to_string)
                .unwrap_or_else(|| self.site_title.clone()),
            icon: match page.icon {
                Some(glyph) => PageIcon::glyph(glyph),
                None => self.host.assets().page_icon(),
            },
            layout: self.layout,
            sidebar: self.sidebar,
        }
    }
}

fn theme_option(theme: Theme, active: Theme) -> ThemeOption {
    ThemeOption {
        key: theme.key(),
        label: theme.label(),
        checked: theme == active,
    }
}
