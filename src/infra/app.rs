use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{self};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::routes::portfolio::get_portfolio;
use crate::adapter::http::routes::profile::{create_profile, get_profile, update_profile};
use crate::adapter::http::routes::project::{projects_by_skill, search_projects};
use crate::adapter::http::routes::skill::{list_skills, top_skills};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([http::Method::POST, http::Method::GET, http::Method::PATCH])
            .allow_headers([CONTENT_TYPE]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([http::Method::POST, http::Method::GET, http::Method::PATCH])
        .allow_headers([CONTENT_TYPE])
}

pub fn profile_router() -> Router<AppState> {
    Router::new().route("/", get(get_profile).post(create_profile).patch(update_profile))
}

pub fn skill_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_skills))
        .route("/top", get(top_skills))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/profile", profile_router())
        .nest("/skills", skill_router())
        .route("/projects/skill/{name}", get(projects_by_skill))
        .route("/search", get(search_projects))
        .route("/portfolio", get(get_portfolio))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    let base_path = config.application.base_path.trim_matches('/');

    let api = if base_path.is_empty() {
        Router::new().merge(router())
    } else {
        Router::new().nest(&format!("/{}", base_path), router())
    };

    api.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
