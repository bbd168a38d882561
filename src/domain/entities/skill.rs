use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::application::app_error::AppError;
use crate::domain::entities::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Expert" => Ok(SkillLevel::Expert),
            other => Err(AppError::InvalidSkillLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub id: Id<Skill>,
    pub name: String,
    pub level: SkillLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    pub fn new(name: String, level: SkillLevel) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            level,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A skill together with the number of projects that reference it.
#[derive(Debug, Clone)]
pub struct SkillUsage {
    pub skill: Skill,
    pub count: i64,
}
