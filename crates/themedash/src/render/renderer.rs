//! Pre-compiled HTML page renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::Error;

/// Templates compiled into the binary, registered under their file names.
///
/// The `.html` suffix turns on HTML auto-escaping for each of them.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("sidebar.html", include_str!("../../templates/sidebar.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
];

/// Name of the template every page is rendered through.
pub const LAYOUT_TEMPLATE: &str = "layout.html";

/// A renderer with the shell's templates pre-registered.
///
/// Templates are compiled once and reused for every render.
pub struct Renderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field(
                "templates",
                &self.env.templates().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Renderer {
    /// Creates a renderer holding the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env);
        for &(name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}
