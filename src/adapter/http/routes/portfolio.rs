use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::portfolio::PortfolioResponse;
use crate::application::app_error::AppResult;
use crate::application::interactors::portfolio::GetPortfolioInteractor;

#[utoipa::path(
    get,
    path = "/portfolio",
    tag = "Portfolio",
    responses(
        (
            status = 200,
            description = "Profile, every project and every skill in one payload",
            body = PortfolioResponse
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
pub async fn get_portfolio(interactor: GetPortfolioInteractor) -> AppResult<impl IntoResponse> {
    let result = interactor.execute().await?;
    Ok((StatusCode::OK, Json(PortfolioResponse::from(result))))
}
