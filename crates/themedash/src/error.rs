//! Crate-level error type.

/// Errors that abort a render.
///
/// Missing assets are never errors; they surface as notices on the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("unknown page '{0}'")]
    UnknownPage(String),
}
