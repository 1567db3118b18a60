//! Per-render output accumulator.

use serde::Serialize;

use crate::assets::PageIcon;
use crate::config::{Layout, SidebarState};

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
}

/// A non-fatal message shown at the top of the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Browser-level settings for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub icon: PageIcon,
    pub layout: Layout,
    pub sidebar: SidebarState,
}

/// Everything a single render produces besides the page markup itself.
#[derive(Debug, Clone)]
pub struct Frame {
    pub config: PageConfig,
    notices: Vec<Notice>,
    halted: bool,
}

impl Frame {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            notices: Vec::new(),
            halted: false,
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::warning(message));
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Stops the render; nothing after this point is produced.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
