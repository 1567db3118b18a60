//! HTTP handlers.
//!
//! Every handler resolves the caller's session from the cookie (creating one
//! when needed), does its work under that session's lock, and attaches the
//! cookie to the response if the session is new.

use axum::{
    extract::{Form, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use themedash::{lock_session, SidebarAction, Theme, HOME_ROUTE};
use tracing::{debug, info};

use crate::app::AppState;
use crate::errors::{AppError, AppResult};
use crate::session_cookie;

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub page: Option<String>,
}

/// Landing page.
pub async fn home_handler(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    render_route(&state, &headers, HOME_ROUTE, None)
}

/// Any registered page by route name.
pub async fn page_handler(
    State(state): State<AppState>,
    Path(route): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    render_route(&state, &headers, &route, None)
}

/// Theme selector submission.
///
/// A change answers `303 See Other` back to the page, so the browser performs
/// a full re-render with the new stylesheet. Re-selecting the active theme
/// answers `204 No Content` and leaves both the session and the page alone.
pub async fn select_theme_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> AppResult<Response> {
    let requested: Theme = form.theme.parse()?;
    let (id, session, created) = state.session_for(&headers);

    let selection = {
        let mut session = lock_session(&session);
        state.shell.host().on_theme_selected(&mut session, requested)
    };

    let response = if selection.needs_rerender() {
        info!(session = %id, theme = %requested, "theme selected");
        Redirect::to(&state.page_href(form.page.as_deref())).into_response()
    } else {
        debug!(session = %id, theme = %requested, "theme already active");
        StatusCode::NO_CONTENT.into_response()
    };
    Ok(session_cookie::attach(response, id, created))
}

/// Exit / Back / Help buttons: render the page halted.
pub async fn sidebar_action_handler(
    State(state): State<AppState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Form(form): Form<ActionForm>,
) -> AppResult<Response> {
    let action: SidebarAction = action.parse()?;
    let route = form
        .page
        .as_deref()
        .filter(|r| state.shell.pages().get(r).is_some())
        .unwrap_or(HOME_ROUTE)
        .to_string();
    render_route(&state, &headers, &route, Some(action))
}

/// The site icon image.
pub async fn icon_handler(State(state): State<AppState>) -> AppResult<Response> {
    let (bytes, mime) = state
        .shell
        .host()
        .assets()
        .icon_bytes()
        .map_err(|_| AppError::not_found("icon not found"))?;
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}

fn render_route(
    state: &AppState,
    headers: &HeaderMap,
    route: &str,
    action: Option<SidebarAction>,
) -> AppResult<Response> {
    if state.shell.pages().get(route).is_none() {
        return Err(AppError::not_found(format!("unknown page '{}'", route)));
    }

    let (id, session, created) = state.session_for(headers);
    let page = {
        let mut session = lock_session(&session);
        state.shell.render(route, &mut session, action)?
    };

    let mut response = Html(page.html).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(session_cookie::attach(response, id, created))
}
