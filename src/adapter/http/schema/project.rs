use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::adapter::http::schema::skill::SkillResponse;
use crate::application::dto::project::ProjectDTO;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "019c47ec-183d-744e-b11d-cd409015bf13",
    "title": "Smart Electricity Billing System",
    "description": "Web-based electricity billing platform",
    "liveUrl": null,
    "repoUrl": "https://github.com/jane/billing",
    "skills": [],
    "createdAt": "2026-01-01T00:00:00Z",
    "updatedAt": "2026-01-01T00:00:00Z"
}))]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub skills: Vec<SkillResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectDTO> for ProjectResponse {
    fn from(dto: ProjectDTO) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            live_url: dto.live_url,
            repo_url: dto.repo_url,
            skills: dto.skills.into_iter().map(SkillResponse::from).collect(),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring of title or description. Empty or absent lists every project.
    #[param(example = "billing")]
    pub q: Option<String>,
}
