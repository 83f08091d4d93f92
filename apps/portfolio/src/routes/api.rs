//! JSON API over the same data store and filter as the HTML page.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::portfolio::{filter_projects, tag_set, Portfolio, Project, ProjectFilter};
use crate::routes::pages::SearchQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: usize,
    #[serde(flatten)]
    pub filter: ProjectFilter,
}

impl ProjectListResponse {
    fn new(projects: Vec<&Project>, filter: ProjectFilter) -> Self {
        Self {
            total: projects.len(),
            projects: projects.into_iter().cloned().collect(),
            filter,
        }
    }
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/v1/projects?q=&tag=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<ProjectListResponse> {
    let filter = ProjectFilter::new(&params.q, &params.tag);
    let projects = filter_projects(&state.portfolio.projects, &filter);
    Json(ProjectListResponse::new(projects, filter))
}

/// GET /api/v1/tags
pub async fn handle_list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(tag_set(&state.portfolio.projects))
}

/// GET /api/v1/tags/:tag/projects
pub async fn handle_tag_projects(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let filter = ProjectFilter::new("", &tag);
    if !tag_set(&state.portfolio.projects).contains(&filter.tag) {
        return Err(AppError::NotFound(format!("Tag '{}' not found", filter.tag)));
    }
    let projects = filter_projects(&state.portfolio.projects, &filter);
    Ok(Json(ProjectListResponse::new(projects, filter)))
}
