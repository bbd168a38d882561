use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::skill::Skill;

#[derive(Debug, Clone)]
pub struct Project {
    pub id: Id<Project>,
    pub title: String,
    pub description: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    /// Ordered skill references; resolved into full records before leaving the service.
    pub skill_ids: Vec<Id<Skill>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        title: String,
        description: String,
        live_url: Option<String>,
        repo_url: Option<String>,
        skill_ids: Vec<Id<Skill>>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Id::generate(),
            title,
            description,
            live_url,
            repo_url,
            skill_ids,
            created_at: now,
            updated_at: now,
        }
    }
}
