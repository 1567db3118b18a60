//! Stylesheet resources and injection.
//!
//! - [`Stylesheet`]: Text content of a stylesheet file
//! - [`StyleScope`]: Injected stylesheets keyed by a stable identifier
//! - [`StyleError`]: Recoverable loading failures

mod error;
mod scope;

pub use error::StyleError;
pub use scope::{InjectedStyle, StyleScope, Stylesheet, GLOBAL_STYLE_ID, THEME_STYLE_ID};
