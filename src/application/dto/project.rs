use chrono::{DateTime, Utc};

use crate::application::dto::skill::SkillDTO;

/// Which subset of projects to list. Skill filtering and free-text search
/// never combine in one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    SkillName(String),
    SearchText(String),
}

#[derive(Debug, Clone)]
pub struct ProjectDTO {
    pub id: String,
    pub title: String,
    pub description: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub skills: Vec<SkillDTO>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
