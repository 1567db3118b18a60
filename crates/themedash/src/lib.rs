//! # themedash
//!
//! A themed dashboard shell: per-session Light/Dark theme selection,
//! stylesheet injection under stable identifiers, and server-rendered pages
//! resolved from an explicit registry.
//!
//! ## Overview
//!
//! - [`Theme`], [`select`]: The two-state theme machine as pure data
//! - [`ThemeHost`]: Reads, changes and applies a session's theme
//! - [`Session`], [`SessionStore`]: Explicit per-session state, kept between
//!   renders by the hosting layer
//! - [`Shell`]: Composes a complete page (stylesheets, sidebar, body)
//! - [`PageRegistry`]: Route name to page render function
//!
//! Nothing in a render is fatal except template failures: missing assets
//! degrade to notices on the page.
//!
//! ## Example
//!
//! ```rust,no_run
//! use themedash::{AppConfig, Session, Shell, Theme};
//! use uuid::Uuid;
//!
//! let shell = Shell::new(&AppConfig::default()).unwrap();
//! let mut session = Session::new(Uuid::new_v4(), Theme::Light);
//!
//! shell.host().on_theme_selected(&mut session, Theme::Dark);
//! let page = shell.render("home", &mut session, None).unwrap();
//! assert_eq!(page.theme, Theme::Dark);
//! ```

pub mod assets;
pub mod config;
mod error;
pub mod frame;
mod host;
pub mod pages;
pub mod render;
pub mod session;
mod shell;
pub mod style;
pub mod theme;

pub use assets::{AssetDir, PageIcon, FALLBACK_ICON_GLYPH};
pub use config::{AppConfig, ConfigError, Layout, SidebarState};
pub use error::Error;
pub use frame::{Frame, Notice, NoticeLevel, PageConfig};
pub use host::ThemeHost;
pub use pages::{Page, PageBody, PageContext, PageRegistry, DASHBOARD_ROUTE, HOME_ROUTE};
pub use render::Renderer;
pub use session::{lock_session, Session, SessionStore, SharedSession};
pub use shell::{RenderedPage, Shell, SidebarAction, UnknownAction, PLACEHOLDER_ENTRIES};
pub use style::{StyleError, StyleScope, Stylesheet};
pub use theme::{select, set_theme_detector, DefaultTheme, Selection, Theme, UnknownTheme};
