//! HTML rendering over minijinja.

mod filters;
mod renderer;

pub use filters::glyph_data_uri;
pub use renderer::{Renderer, LAYOUT_TEMPLATE};
