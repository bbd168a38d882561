use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::app_error::{AppError, AppResult, FieldViolation};
use crate::application::dto::profile::{CreateProfileDTO, ProfileDTO, UpdateProfileDTO};
use crate::domain::entities::profile::{Education, Experience, SocialLinks};

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping only the date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn valid_date(value: &str) -> Result<(), ValidationError> {
    if parse_date(value).is_some() {
        return Ok(());
    }
    Err(ValidationError::new("date").with_message("Must be a date such as 2024-01-31".into()))
}

/// Postgres text and jsonb columns cannot hold U+0000.
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul").with_message("Must not contain NUL characters".into()));
    }
    Ok(())
}

/// Keeps an explicit `null` apart from an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    #[validate(
        required(message = "Degree is required"),
        length(min = 1, message = "Degree is required"),
        custom(function = "no_nul")
    )]
    #[schema(example = "BSc Computer Science")]
    pub degree: Option<String>,
    #[validate(
        required(message = "School is required"),
        length(min = 1, message = "School is required"),
        custom(function = "no_nul")
    )]
    #[schema(example = "University of Lagos")]
    pub school: Option<String>,
    #[validate(
        required(message = "Year is required"),
        length(min = 1, message = "Year is required"),
        custom(function = "no_nul")
    )]
    #[schema(example = "2023 - 2027")]
    pub year: Option<String>,
}

impl From<EducationRequest> for Education {
    fn from(request: EducationRequest) -> Self {
        Self {
            degree: request.degree.unwrap_or_default(),
            school: request.school.unwrap_or_default(),
            year: request.year.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    #[validate(
        required(message = "Company is required"),
        length(min = 1, message = "Company is required"),
        custom(function = "no_nul")
    )]
    #[schema(example = "Acme Corp")]
    pub company: Option<String>,
    #[validate(
        required(message = "Position is required"),
        length(min = 1, message = "Position is required"),
        custom(function = "no_nul")
    )]
    #[schema(example = "Backend Engineer")]
    pub position: Option<String>,
    #[validate(required(message = "Start date is required"), custom(function = "valid_date"))]
    #[schema(example = "2024-01-15")]
    pub start_date: Option<String>,
    #[validate(custom(function = "valid_date"))]
    #[schema(example = json!(null))]
    pub end_date: Option<String>,
    #[validate(custom(function = "no_nul"))]
    pub description: Option<String>,
}

impl TryFrom<ExperienceRequest> for Experience {
    type Error = AppError;

    fn try_from(request: ExperienceRequest) -> AppResult<Self> {
        let start_date = request
            .start_date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| AppError::Validation(vec![FieldViolation::new("startDate", "Start date is required")]))?;
        let end_date = match request.end_date.as_deref() {
            Some(value) => Some(
                parse_date(value)
                    .ok_or_else(|| AppError::Validation(vec![FieldViolation::new("endDate", "Invalid date")]))?,
            ),
            None => None,
        };

        Ok(Self {
            company: request.company.unwrap_or_default(),
            position: request.position.unwrap_or_default(),
            start_date,
            end_date,
            description: request.description,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksSchema {
    #[validate(custom(function = "no_nul"))]
    #[schema(example = "https://github.com/jane")]
    pub github: Option<String>,
    #[validate(custom(function = "no_nul"))]
    #[schema(example = "https://linkedin.com/in/jane")]
    pub linkedin: Option<String>,
    #[validate(custom(function = "no_nul"))]
    #[schema(example = json!(null))]
    pub portfolio: Option<String>,
}

impl From<SocialLinksSchema> for SocialLinks {
    fn from(schema: SocialLinksSchema) -> Self {
        Self {
            github: schema.github,
            linkedin: schema.linkedin,
            portfolio: schema.portfolio,
        }
    }
}

impl From<SocialLinks> for SocialLinksSchema {
    fn from(links: SocialLinks) -> Self {
        Self {
            github: links.github,
            linkedin: links.linkedin,
            portfolio: links.portfolio,
        }
    }
}

fn convert_experience(items: Vec<ExperienceRequest>) -> AppResult<Vec<Experience>> {
    items.into_iter().map(Experience::try_from).collect()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Jane Doe",
    "email": "jane@example.com",
    "bio": "Full-stack developer",
    "education": [{"degree": "BSc Computer Science", "school": "University of Lagos", "year": "2023 - 2027"}],
    "experience": [{"company": "Acme Corp", "position": "Backend Engineer", "startDate": "2024-01-15"}],
    "socialLinks": {"github": "https://github.com/jane"}
}))]
pub struct CreateProfileRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required"),
        custom(function = "no_nul")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Email is required"), email(message = "Invalid email"), custom(function = "no_nul"))]
    pub email: Option<String>,
    #[validate(
        required(message = "Bio is required"),
        length(min = 1, message = "Bio is required"),
        custom(function = "no_nul")
    )]
    pub bio: Option<String>,
    #[validate(required(message = "Education is required"), nested)]
    pub education: Option<Vec<EducationRequest>>,
    #[validate(nested)]
    pub experience: Option<Vec<ExperienceRequest>>,
    #[validate(required(message = "Social links are required"), nested)]
    pub social_links: Option<SocialLinksSchema>,
}

impl TryFrom<CreateProfileRequest> for CreateProfileDTO {
    type Error = AppError;

    fn try_from(request: CreateProfileRequest) -> AppResult<Self> {
        Ok(Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            bio: request.bio.unwrap_or_default(),
            education: request
                .education
                .unwrap_or_default()
                .into_iter()
                .map(Education::from)
                .collect(),
            experience: convert_experience(request.experience.unwrap_or_default())?,
            social_links: request.social_links.unwrap_or_default().into(),
        })
    }
}

/// Partial update. An absent field keeps the stored value; `null` is rejected.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"bio": "Rust and Postgres enthusiast"}))]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(min = 1, message = "Name must not be empty"), custom(function = "no_nul"))]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(email(message = "Invalid email"), custom(function = "no_nul"))]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(min = 1, message = "Bio must not be empty"), custom(function = "no_nul"))]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(nested)]
    #[schema(value_type = Option<Vec<EducationRequest>>)]
    pub education: Option<Option<Vec<EducationRequest>>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(nested)]
    #[schema(value_type = Option<Vec<ExperienceRequest>>)]
    pub experience: Option<Option<Vec<ExperienceRequest>>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(nested)]
    #[schema(value_type = Option<SocialLinksSchema>)]
    pub social_links: Option<Option<SocialLinksSchema>>,
}

fn not_null<T>(field: &str, value: Option<Option<T>>, violations: &mut Vec<FieldViolation>) -> Option<T> {
    match value {
        Some(None) => {
            violations.push(FieldViolation::new(field, "Must not be null"));
            None
        }
        Some(Some(value)) => Some(value),
        None => None,
    }
}

impl TryFrom<UpdateProfileRequest> for UpdateProfileDTO {
    type Error = AppError;

    fn try_from(request: UpdateProfileRequest) -> AppResult<Self> {
        let mut violations = Vec::new();
        let name = not_null("name", request.name, &mut violations);
        let email = not_null("email", request.email, &mut violations);
        let bio = not_null("bio", request.bio, &mut violations);
        let education = not_null("education", request.education, &mut violations);
        let experience = not_null("experience", request.experience, &mut violations);
        let social_links = not_null("socialLinks", request.social_links, &mut violations);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(Self {
            name,
            email,
            bio,
            education: education.map(|items| items.into_iter().map(Education::from).collect()),
            experience: experience.map(convert_experience).transpose()?,
            social_links: social_links.map(SocialLinks::from),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub company: String,
    pub position: String,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub start_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "019c47ec-183d-744e-b11d-cd409015bf13",
    "name": "Jane Doe",
    "email": "jane@example.com",
    "bio": "Full-stack developer",
    "education": [{"degree": "BSc Computer Science", "school": "University of Lagos", "year": "2023 - 2027"}],
    "experience": [],
    "socialLinks": {"github": "https://github.com/jane", "linkedin": null, "portfolio": null},
    "createdAt": "2026-01-01T00:00:00Z",
    "updatedAt": "2026-01-01T00:00:00Z"
}))]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub education: Vec<EducationResponse>,
    pub experience: Vec<ExperienceResponse>,
    pub social_links: SocialLinksSchema,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            bio: dto.bio,
            education: dto
                .education
                .into_iter()
                .map(|e| EducationResponse {
                    degree: e.degree,
                    school: e.school,
                    year: e.year,
                })
                .collect(),
            experience: dto
                .experience
                .into_iter()
                .map(|e| ExperienceResponse {
                    company: e.company,
                    position: e.position,
                    start_date: e.start_date,
                    end_date: e.end_date,
                    description: e.description,
                })
                .collect(),
            social_links: dto.social_links.into(),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}
