use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    /// Free text such as "2023 – 2027"; never parsed.
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// `None` means the position is ongoing.
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub social_links: SocialLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        name: String,
        email: String,
        bio: String,
        education: Vec<Education>,
        experience: Vec<Experience>,
        social_links: SocialLinks,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            email,
            bio,
            education,
            experience,
            social_links,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every field present in `patch`. Nested values are swapped
    /// wholesale, never merged.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(social_links) = patch.social_links {
            self.social_links = social_links;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub social_links: Option<SocialLinks>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.bio.is_none()
            && self.education.is_none()
            && self.experience.is_none()
            && self.social_links.is_none()
    }
}
