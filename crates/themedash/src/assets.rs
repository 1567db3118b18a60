//! Static assets: stylesheets and the site icon.
//!
//! Everything is read from disk on demand. Files are treated as immutable for
//! the lifetime of the process, but nothing is cached, so an asset removed at
//! runtime is reported on the next render.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mime_guess::Mime;

use crate::style::{StyleError, Stylesheet};

/// Glyph used as the page icon when the icon image is missing.
pub const FALLBACK_ICON_GLYPH: &str = "💡";

/// File name of the stylesheet applied to every page.
pub const GLOBAL_STYLESHEET: &str = "style.css";

/// The directory holding the shell's static assets.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
    icon_file: String,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>, icon_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            icon_file: icon_file.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of an asset file.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    pub fn icon_path(&self) -> PathBuf {
        self.path(&self.icon_file)
    }

    /// Reads a stylesheet file.
    ///
    /// A missing file is reported as [`StyleError::NotFound`] so callers can
    /// distinguish it from unreadable content.
    pub fn read_stylesheet(&self, file: &str) -> Result<Stylesheet, StyleError> {
        let path = self.path(file);
        match fs::read_to_string(&path) {
            Ok(css) => Ok(Stylesheet::new(css)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StyleError::NotFound { path }),
            Err(source) => Err(StyleError::Read { path, source }),
        }
    }

    /// Resolves the site icon, substituting the fallback glyph when the image
    /// file is absent.
    pub fn page_icon(&self) -> PageIcon {
        let path = self.icon_path();
        if path.is_file() {
            PageIcon::Image { path }
        } else {
            PageIcon::Glyph(FALLBACK_ICON_GLYPH.to_string())
        }
    }

    /// Reads the icon image along with its MIME type, guessed from the file
    /// extension.
    pub fn icon_bytes(&self) -> io::Result<(Vec<u8>, Mime)> {
        let path = self.icon_path();
        let bytes = fs::read(&path)?;
        Ok((bytes, mime_guess::from_path(&path).first_or_octet_stream()))
    }
}

/// The icon shown in the browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageIcon {
    /// An image file served from the assets directory.
    Image { path: PathBuf },
    /// A single emoji rendered as the icon.
    Glyph(String),
}

impl PageIcon {
    pub fn glyph(glyph: &str) -> Self {
        PageIcon::Glyph(glyph.to_string())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PageIcon::Glyph(g) if g == FALLBACK_ICON_GLYPH)
    }
}
