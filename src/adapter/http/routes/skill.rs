use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::skill::{SkillResponse, TopSkillResponse, TopSkillsQuery};
use crate::application::app_error::AppResult;
use crate::application::interactors::skill::{ListSkillsInteractor, TopSkillsInteractor};
use crate::infra::constants::{DEFAULT_TOP_SKILLS, MAX_TOP_SKILLS};

#[utoipa::path(
    get,
    path = "/skills",
    tag = "Skills",
    responses(
        (
            status = 200,
            description = "All skills ordered by name",
            body = Vec<SkillResponse>
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
pub async fn list_skills(interactor: ListSkillsInteractor) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;
    Ok((
        StatusCode::OK,
        Json(result.into_iter().map(SkillResponse::from).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/skills/top",
    tag = "Skills",
    params(TopSkillsQuery),
    responses(
        (
            status = 200,
            description = "Skills ranked by the number of projects using them",
            body = Vec<TopSkillResponse>
        ),
        (
            status = 400,
            description = "Malformed query string",
            body = ErrorResponse
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
pub async fn top_skills(
    interactor: TopSkillsInteractor,
    query: Result<Query<TopSkillsQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_SKILLS).clamp(1, MAX_TOP_SKILLS);
    let result = interactor.execute(limit).await?;
    Ok((
        StatusCode::OK,
        Json(result.into_iter().map(TopSkillResponse::from).collect::<Vec<_>>()),
    ))
}
