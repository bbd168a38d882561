use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::profile::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::profile::{CreateProfileDTO, UpdateProfileDTO};
use crate::application::interactors::profile::{
    CreateProfileInteractor, GetProfileInteractor, UpdateProfileInteractor,
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    responses(
        (
            status = 200,
            description = "The profile, or null when none has been created yet",
            body = Option<ProfileResponse>
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
pub async fn get_profile(interactor: GetProfileInteractor) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;
    Ok((StatusCode::OK, Json(result.map(ProfileResponse::from))))
}

#[utoipa::path(
    post,
    path = "/profile",
    tag = "Profile",
    request_body = CreateProfileRequest,
    responses(
        (
            status = 201,
            description = "Profile created",
            body = ProfileResponse
        ),
        (
            status = 400,
            description = "Validation error or profile already exists",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Profile already exists. Use PATCH to update."
                }
            )
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
pub async fn create_profile(
    interactor: CreateProfileInteractor,
    ValidJson(payload): ValidJson<CreateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateProfileDTO::try_from(payload)?;
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(result))))
}

#[utoipa::path(
    patch,
    path = "/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (
            status = 200,
            description = "Profile updated",
            body = ProfileResponse
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Validation failed",
                    "fields": [{"field": "email", "message": "Invalid email"}]
                }
            )
        ),
        (
            status = 404,
            description = "No profile exists yet",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Profile not found"
                }
            )
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
pub async fn update_profile(
    interactor: UpdateProfileInteractor,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateProfileDTO::try_from(payload)?;
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(result))))
}
