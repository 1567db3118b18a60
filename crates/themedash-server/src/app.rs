//! Router and shared state.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use themedash::{AppConfig, SessionStore, SharedSession, Shell};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::handlers;
use crate::session_cookie;

/// How often idle sessions are swept.
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<Shell>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, themedash::Error> {
        Ok(Self {
            shell: Arc::new(Shell::new(config)?),
            sessions: SessionStore::new(),
        })
    }

    /// Session named by the request cookie, or a new one.
    pub fn session_for(&self, headers: &HeaderMap) -> (Uuid, SharedSession, bool) {
        self.sessions
            .get_or_create(session_cookie::session_id(headers), || {
                self.shell.host().initial_theme()
            })
    }

    /// URL of a registered page, falling back to the landing page.
    pub fn page_href(&self, route: Option<&str>) -> String {
        route
            .and_then(|r| self.shell.pages().get(r))
            .map(|p| p.href())
            .unwrap_or_else(|| "/".to_string())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/pages/{route}", get(handlers::page_handler))
        .route("/theme", post(handlers::select_theme_handler))
        .route("/actions/{action}", post(handlers::sidebar_action_handler))
        .route("/icon", get(handlers::icon_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drops sessions idle for longer than `ttl`.
pub fn spawn_session_reaper(sessions: SessionStore, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            sessions.purge_idle(ttl);
        }
    })
}
