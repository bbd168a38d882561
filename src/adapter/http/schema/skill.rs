use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::dto::skill::{SkillDTO, TopSkillDTO};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "019c47ec-183d-744e-b11d-cd409015bf13",
    "name": "React.js",
    "level": "Expert",
    "createdAt": "2026-01-01T00:00:00Z",
    "updatedAt": "2026-01-01T00:00:00Z"
}))]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    #[schema(example = "Expert")]
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkillDTO> for SkillResponse {
    fn from(dto: SkillDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            level: dto.level,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "id": "019c47ec-183d-744e-b11d-cd409015bf13",
    "name": "React.js",
    "level": "Expert",
    "count": 2
}))]
pub struct TopSkillResponse {
    pub id: String,
    pub name: String,
    pub level: String,
    pub count: i64,
}

impl From<TopSkillDTO> for TopSkillResponse {
    fn from(dto: TopSkillDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            level: dto.level,
            count: dto.count,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopSkillsQuery {
    #[param(minimum = 1, maximum = 50, default = 10)]
    pub limit: Option<i64>,
}
