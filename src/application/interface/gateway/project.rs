use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::project::Project;
use crate::domain::entities::skill::Skill;

#[async_trait]
pub trait ProjectReader: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Project>>;
    async fn find_by_skill(&self, skill_id: &Id<Skill>) -> AppResult<Vec<Project>>;
    async fn search(&self, text: &str) -> AppResult<Vec<Project>>;
}
