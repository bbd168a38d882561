use axum::{Json, response::Html};
use utoipa::{OpenApi, openapi::OpenApi as OpenApiDoc};

use crate::adapter::http::{
    app_error_impl::{ErrorResponse, FieldErrorResponse},
    routes::{portfolio, profile, project, skill},
    schema::{
        portfolio::PortfolioResponse,
        profile::{
            CreateProfileRequest, EducationRequest, EducationResponse, ExperienceRequest, ExperienceResponse,
            ProfileResponse, SocialLinksSchema, UpdateProfileRequest,
        },
        project::ProjectResponse,
        skill::{SkillResponse, TopSkillResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        profile::get_profile,
        profile::create_profile,
        profile::update_profile,
        skill::list_skills,
        skill::top_skills,
        project::projects_by_skill,
        project::search_projects,
        portfolio::get_portfolio
    ),
    components(
        schemas(
            ErrorResponse,
            FieldErrorResponse,
            CreateProfileRequest,
            UpdateProfileRequest,
            EducationRequest,
            ExperienceRequest,
            SocialLinksSchema,
            ProfileResponse,
            EducationResponse,
            ExperienceResponse,
            SkillResponse,
            TopSkillResponse,
            ProjectResponse,
            PortfolioResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Portfolio API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
