//! Renderable pages and the registry the host resolves them from.
//!
//! A page is a plain function from [`PageContext`] to [`PageBody`]. The shell
//! wraps every body in the shared layout, so pages never deal with themes or
//! stylesheets themselves.

mod chart;
mod dashboard;
mod home;

use minijinja::Value;

use crate::theme::Theme;

pub use chart::{LineChart, SvgChart, SvgSeries};

/// Route of the landing page, served at `/`.
pub const HOME_ROUTE: &str = "home";

/// Route of the example data page.
pub const DASHBOARD_ROUTE: &str = "dashboard";

/// What a page can see while rendering.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub theme: Theme,
}

/// A rendered page body, ready to be placed into the layout.
#[derive(Debug, Clone)]
pub struct PageBody {
    /// Template the body is rendered with; its context is exposed as `page`.
    pub template: &'static str,
    pub context: Value,
    /// Optional page-specific section at the bottom of the sidebar.
    pub sidebar_header: Option<&'static str>,
}

pub type RenderFn = fn(&PageContext) -> PageBody;

/// A routable page.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub route: &'static str,
    /// Label used in navigation.
    pub label: &'static str,
    /// Browser title override; the site title is used when absent.
    pub title: Option<&'static str>,
    /// Glyph icon override; the site icon is used when absent.
    pub icon: Option<&'static str>,
    pub render: RenderFn,
}

impl Page {
    /// URL path the page is served from.
    pub fn href(&self) -> String {
        if self.route == HOME_ROUTE {
            "/".to_string()
        } else {
            format!("/pages/{}", self.route)
        }
    }
}

/// Maps route names to pages, in navigation order.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the landing page and the example dashboard.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(home::page());
        registry.register(dashboard::page());
        registry
    }

    /// Adds a page. A page already registered under the same route is
    /// replaced in place and returned.
    pub fn register(&mut self, page: Page) -> Option<Page> {
        match self.pages.iter_mut().find(|p| p.route == page.route) {
            Some(existing) => Some(std::mem::replace(existing, page)),
            None => {
                self.pages.push(page);
                None
            }
        }
    }

    pub fn get(&self, route: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.route == route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn routes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|p| p.route)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
