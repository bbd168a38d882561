use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::skill::{SkillDTO, TopSkillDTO};
use crate::application::interface::gateway::skill::SkillReader;

#[derive(Clone)]
pub struct ListSkillsInteractor {
    skill_reader: Arc<dyn SkillReader>,
}

impl ListSkillsInteractor {
    pub fn new(skill_reader: Arc<dyn SkillReader>) -> Self {
        Self { skill_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<SkillDTO>> {
        let skills = self.skill_reader.get_all().await?;
        Ok(skills.into_iter().map(SkillDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct TopSkillsInteractor {
    skill_reader: Arc<dyn SkillReader>,
}

impl TopSkillsInteractor {
    pub fn new(skill_reader: Arc<dyn SkillReader>) -> Self {
        Self { skill_reader }
    }

    pub async fn execute(&self, limit: i64) -> AppResult<Vec<TopSkillDTO>> {
        if limit < 1 {
            return Ok(Vec::new());
        }
        let usages = self.skill_reader.top_by_usage(limit).await?;
        Ok(usages.into_iter().map(TopSkillDTO::from).collect())
    }
}
