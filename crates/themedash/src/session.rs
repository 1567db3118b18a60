//! Per-session state and the in-memory session store.
//!
//! A [`Session`] is the explicit state object handed to every render. The
//! [`SessionStore`] keeps sessions alive between renders, keyed by session id,
//! and drops them once they sit idle past a TTL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::style::StyleScope;
use crate::theme::Theme;

/// State kept for one connected browser.
///
/// The selected theme is stored as its raw key. Values restored from
/// elsewhere may not name a known theme; [`crate::ThemeHost::get_active_theme`]
/// repairs them on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    selected_theme: String,
    #[serde(default)]
    styles: StyleScope,
}

impl Session {
    pub fn new(id: Uuid, theme: Theme) -> Self {
        Self {
            id,
            selected_theme: theme.key().to_string(),
            styles: StyleScope::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The stored theme value, exactly as held.
    pub fn selected_theme_raw(&self) -> &str {
        &self.selected_theme
    }

    /// Parses the stored theme value without repairing it.
    pub fn selected_theme(&self) -> Option<Theme> {
        self.selected_theme.parse().ok()
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.selected_theme = theme.key().to_string();
    }

    /// Stylesheets currently injected into this session's pages.
    pub fn styles(&self) -> &StyleScope {
        &self.styles
    }

    pub(crate) fn styles_mut(&mut self) -> &mut StyleScope {
        &mut self.styles
    }
}

/// A session shared between the store and the render currently using it.
pub type SharedSession = Arc<Mutex<Session>>;

/// Locks a session, recovering the guard if a previous holder panicked.
pub fn lock_session(session: &SharedSession) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

/// Thread-safe store of live sessions.
///
/// Each session sits behind its own lock, so renders for different sessions
/// never contend and one session's state is never visible to another.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a session starting with `theme` and returns its id.
    pub fn create(&self, theme: Theme) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(Session::new(id, theme)));
        self.insert_shared(id, Arc::clone(&session));
        info!(session = %id, theme = %theme, "session created");
        (id, session)
    }

    fn insert_shared(&self, id: Uuid, session: SharedSession) {
        self.entries().insert(
            id,
            Entry {
                session,
                last_seen: Instant::now(),
            },
        );
    }

    /// Looks up a live session and marks it as seen.
    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        let mut entries = self.entries();
        let entry = entries.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(Arc::clone(&entry.session))
    }

    /// Returns the session for `id`, or a fresh one if `id` is absent or
    /// unknown. The flag is true when a session was created.
    pub fn get_or_create<F>(&self, id: Option<Uuid>, default_theme: F) -> (Uuid, SharedSession, bool)
    where
        F: FnOnce() -> Theme,
    {
        if let Some(id) = id {
            if let Some(session) = self.get(id) {
                return (id, session, false);
            }
            debug!(session = %id, "unknown session id, starting a new session");
        }
        let (id, session) = self.create(default_theme());
        (id, session, true)
    }

    /// Drops sessions idle for longer than `ttl`. Returns how many were removed.
    pub fn purge_idle(&self, ttl: Duration) -> usize {
        self.purge_idle_at(Instant::now(), ttl)
    }

    fn purge_idle_at(&self, now: Instant, ttl: Duration) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, e| now.saturating_duration_since(e.last_seen) <= ttl);
        let removed = before - entries.len();
        if removed > 0 {
            info!(removed, remaining = entries.len(), "expired idle sessions");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
