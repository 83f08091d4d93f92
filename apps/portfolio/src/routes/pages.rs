//! HTML routes: the portfolio page, the document viewer and the theme toggle.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::portfolio::{filter_projects, tag_set, ProjectFilter};
use crate::render::{render_portfolio_page, render_viewer, PageContext};
use crate::state::AppState;
use crate::theme::{CookiePreferenceStore, ThemeController};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub redirect: Option<String>,
}

fn theme_controller(state: &AppState, headers: &HeaderMap) -> ThemeController<CookiePreferenceStore> {
    ThemeController::load(CookiePreferenceStore::from_headers(
        headers,
        state.config.theme_cookie_max_age,
    ))
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchQuery>,
) -> Html<String> {
    let theme = theme_controller(&state, &headers).theme();
    let portfolio = state.portfolio.as_ref();
    let filter = ProjectFilter::new(&params.q, &params.tag);
    let tags = tag_set(&portfolio.projects);
    let projects = filter_projects(&portfolio.projects, &filter);
    debug!(
        "Rendering portfolio: q={:?} tag={:?} -> {} projects",
        filter.query,
        filter.tag,
        projects.len()
    );

    Html(render_portfolio_page(&PageContext {
        portfolio,
        filter: &filter,
        raw_query: &params.q,
        tags: &tags,
        projects: &projects,
        theme,
        year: Utc::now().year(),
    }))
}

/// GET /viewer?file=<ref>
pub async fn handle_viewer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ViewerQuery>,
) -> Html<String> {
    let theme = theme_controller(&state, &headers).theme();
    Html(render_viewer(params.file.as_deref(), theme))
}

/// POST /theme
///
/// Flips the stored theme and sends the browser back to `redirect`.
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Result<Response, AppError> {
    let target = validate_redirect(form.redirect.as_deref())?;

    let mut controller = theme_controller(&state, &headers);
    controller.toggle();
    let store = controller.into_store();

    let mut response = Redirect::to(target).into_response();
    if let Some(cookie) = store.set_cookie()? {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

/// Only same-origin absolute paths are accepted as redirect targets.
fn validate_redirect(redirect: Option<&str>) -> Result<&str, AppError> {
    let target = match redirect {
        None | Some("") => return Ok("/"),
        Some(target) => target,
    };
    let same_origin = target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\");
    if !same_origin || !target.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(AppError::Validation(format!(
            "redirect must be a same-origin path, got '{target}'"
        )));
    }
    Ok(target)
}
