//! Theme system for the dashboard shell.
//!
//! This module provides:
//!
//! - [`Theme`]: The closed set of visual themes and their stylesheet files
//! - [`select`] / [`Selection`]: The pure selection transition
//! - [`DefaultTheme`]: The starting theme for new sessions, optionally
//!   following the OS color mode

mod adaptive;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, DefaultTheme};
pub use choice::{select, Selection};
pub use theme::{Theme, UnknownTheme};
