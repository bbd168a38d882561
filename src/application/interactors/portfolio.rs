use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::portfolio::PortfolioDTO;
use crate::application::dto::profile::ProfileDTO;
use crate::application::dto::skill::SkillDTO;
use crate::application::interactors::project::populate_skills;
use crate::application::interface::gateway::profile::ProfileReader;
use crate::application::interface::gateway::project::ProjectReader;
use crate::application::interface::gateway::skill::SkillReader;

/// Everything the portfolio page renders on first load.
#[derive(Clone)]
pub struct GetPortfolioInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    project_reader: Arc<dyn ProjectReader>,
    skill_reader: Arc<dyn SkillReader>,
}

impl GetPortfolioInteractor {
    pub fn new(
        profile_reader: Arc<dyn ProfileReader>,
        project_reader: Arc<dyn ProjectReader>,
        skill_reader: Arc<dyn SkillReader>,
    ) -> Self {
        Self {
            profile_reader,
            project_reader,
            skill_reader,
        }
    }

    pub async fn execute(&self) -> AppResult<PortfolioDTO> {
        let profile = self.profile_reader.get().await?.map(ProfileDTO::from);
        let projects = self.project_reader.get_all().await?;
        let projects = populate_skills(self.skill_reader.as_ref(), projects).await?;
        let skills = self
            .skill_reader
            .get_all()
            .await?
            .into_iter()
            .map(SkillDTO::from)
            .collect();

        Ok(PortfolioDTO {
            profile,
            projects,
            skills,
        })
    }
}
