//! HTTP host for the themedash shell.
//!
//! The router serves the registered pages, accepts theme selections and
//! sidebar actions, and keeps one [`themedash::Session`] per browser, keyed by
//! a session cookie.

pub mod app;
pub mod errors;
pub mod handlers;
pub mod session_cookie;

pub use app::{create_router, spawn_session_reaper, AppState};
pub use errors::{AppError, AppResult};
