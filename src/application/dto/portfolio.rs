use crate::application::dto::profile::ProfileDTO;
use crate::application::dto::project::ProjectDTO;
use crate::application::dto::skill::SkillDTO;

#[derive(Debug, Clone)]
pub struct PortfolioDTO {
    pub profile: Option<ProfileDTO>,
    pub projects: Vec<ProjectDTO>,
    pub skills: Vec<SkillDTO>,
}
