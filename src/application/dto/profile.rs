use chrono::{DateTime, Utc};

use crate::domain::entities::profile::{Education, Experience, Profile, ProfilePatch, SocialLinks};

#[derive(Debug, Clone)]
pub struct CreateProfileDTO {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDTO {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub social_links: Option<SocialLinks>,
}

impl From<UpdateProfileDTO> for ProfilePatch {
    fn from(dto: UpdateProfileDTO) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            bio: dto.bio,
            education: dto.education,
            experience: dto.experience,
            social_links: dto.social_links,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub social_links: SocialLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDTO {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name,
            email: profile.email,
            bio: profile.bio,
            education: profile.education,
            experience: profile.experience,
            social_links: profile.social_links,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
