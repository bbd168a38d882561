use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::skill::{Skill, SkillUsage};

#[async_trait]
pub trait SkillReader: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Skill>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Skill>>;
    async fn find_by_ids(&self, ids: &[Id<Skill>]) -> AppResult<Vec<Skill>>;
    async fn top_by_usage(&self, limit: i64) -> AppResult<Vec<SkillUsage>>;
}
