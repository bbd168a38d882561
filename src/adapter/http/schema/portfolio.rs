use serde::Serialize;
use utoipa::ToSchema;

use crate::adapter::http::schema::profile::ProfileResponse;
use crate::adapter::http::schema::project::ProjectResponse;
use crate::adapter::http::schema::skill::SkillResponse;
use crate::application::dto::portfolio::PortfolioDTO;

#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub profile: Option<ProfileResponse>,
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
}

impl From<PortfolioDTO> for PortfolioResponse {
    fn from(dto: PortfolioDTO) -> Self {
        Self {
            profile: dto.profile.map(ProfileResponse::from),
            projects: dto.projects.into_iter().map(ProjectResponse::from).collect(),
            skills: dto.skills.into_iter().map(SkillResponse::from).collect(),
        }
    }
}
