use axum::Json;
use axum::extract::{Path, Query};
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::project::{ProjectResponse, SearchQuery};
use crate::application::app_error::AppResult;
use crate::application::dto::project::ProjectFilter;
use crate::application::interactors::project::ListProjectsInteractor;

#[utoipa::path(
    get,
    path = "/projects/skill/{name}",
    tag = "Projects",
    params(
        ("name" = String, Path, description = "Skill name, matched case-insensitively", example = "react.js")
    ),
    responses(
        (
            status = 200,
            description = "Projects using the skill; empty when no skill has that name",
            body = Vec<ProjectResponse>
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn projects_by_skill(
    interactor: ListProjectsInteractor,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(ProjectFilter::SkillName(name)).await?;
    Ok((
        StatusCode::OK,
        Json(result.into_iter().map(ProjectResponse::from).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "Projects",
    params(SearchQuery),
    responses(
        (
            status = 200,
            description = "Projects whose title or description contains the text",
            body = Vec<ProjectResponse>
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn search_projects(
    interactor: ListProjectsInteractor,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let result = interactor
        .execute(ProjectFilter::SearchText(query.q.unwrap_or_default()))
        .await?;
    Ok((
        StatusCode::OK,
        Json(result.into_iter().map(ProjectResponse::from).collect::<Vec<_>>()),
    ))
}
