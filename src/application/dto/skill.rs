use chrono::{DateTime, Utc};

use crate::domain::entities::skill::{Skill, SkillUsage};

#[derive(Debug, Clone)]
pub struct SkillDTO {
    pub id: String,
    pub name: String,
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Skill> for SkillDTO {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.to_string(),
            name: skill.name,
            level: skill.level.as_str().to_string(),
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TopSkillDTO {
    pub id: String,
    pub name: String,
    pub level: String,
    pub count: i64,
}

impl From<SkillUsage> for TopSkillDTO {
    fn from(usage: SkillUsage) -> Self {
        Self {
            id: usage.skill.id.to_string(),
            name: usage.skill.name,
            level: usage.skill.level.as_str().to_string(),
            count: usage.count,
        }
    }
}
