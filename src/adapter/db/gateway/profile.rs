use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, SocialLinks};

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn find_profile(result: Option<PgRow>) -> AppResult<Option<Profile>> {
        match result {
            Some(row) => {
                let education: Json<Vec<Education>> = row.try_get("education")?;
                let experience: Json<Vec<Experience>> = row.try_get("experience")?;
                let social_links: Json<SocialLinks> = row.try_get("social_links")?;
                Ok(Some(Profile {
                    id: Id::new(row.try_get("id")?),
                    name: row.try_get("name")?,
                    email: row.try_get("email")?,
                    bio: row.try_get("bio")?,
                    education: education.0,
                    experience: experience.0,
                    social_links: social_links.0,
                    created_at: row.try_get("created_at")?,
                    updated_at: row.try_get("updated_at")?,
                }))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert_if_absent(&self, profile: Profile) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (
                                    id,
                                    name,
                                    email,
                                    bio,
                                    education,
                                    experience,
                                    social_links,
                                    created_at,
                                    updated_at
                                )
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                            ON CONFLICT (singleton) DO NOTHING
                            RETURNING id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(&profile.name)
                    .bind(&profile.email)
                    .bind(&profile.bio)
                    .bind(Json(&profile.education))
                    .bind(Json(&profile.experience))
                    .bind(Json(&profile.social_links))
                    .bind(profile.created_at)
                    .bind(profile.updated_at)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Ok(result.is_some())
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, profile: Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                name = $2,
                                email = $3,
                                bio = $4,
                                education = $5,
                                experience = $6,
                                social_links = $7,
                                updated_at = $8
                            WHERE
                                id = $1
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(&profile.name)
                    .bind(&profile.email)
                    .bind(&profile.bio)
                    .bind(Json(&profile.education))
                    .bind(Json(&profile.experience))
                    .bind(Json(&profile.social_links))
                    .bind(profile.updated_at)
                    .execute(tx.as_mut())
                    .await?;

                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn get(&self) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, name, email, bio, education, experience, social_links,
                                created_at, updated_at
                            FROM
                                profiles
                            LIMIT 1
                        "#,
                    )
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }

    async fn get_for_update(&self) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, name, email, bio, education, experience, social_links,
                                created_at, updated_at
                            FROM
                                profiles
                            LIMIT 1
                            FOR UPDATE
                        "#,
                    )
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }
}
