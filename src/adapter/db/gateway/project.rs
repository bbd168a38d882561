use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::project::ProjectReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::project::Project;
use crate::domain::entities::skill::Skill;

#[derive(Clone)]
pub struct ProjectGateway {
    session: SqlxSession,
}

impl ProjectGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_project(row: &PgRow) -> AppResult<Project> {
        let skill_ids: Vec<Uuid> = row.try_get("skill_ids")?;

        Ok(Project {
            id: Id::new(row.try_get("id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            live_url: row.try_get("live_url")?,
            repo_url: row.try_get("repo_url")?,
            skill_ids: skill_ids.into_iter().map(Id::<Skill>::new).collect(),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProjectReader for ProjectGateway {
    async fn get_all(&self) -> AppResult<Vec<Project>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, title, description, live_url, repo_url, skill_ids,
                                created_at, updated_at
                            FROM
                                projects
                            ORDER BY created_at, id
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_project).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_skill(&self, skill_id: &Id<Skill>) -> AppResult<Vec<Project>> {
        self.session
            .with_tx(|tx| {
                let skill_id = skill_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, title, description, live_url, repo_url, skill_ids,
                                created_at, updated_at
                            FROM
                                projects
                            WHERE skill_ids @> ARRAY[$1]::uuid[]
                            ORDER BY created_at, id
                        "#,
                    )
                    .bind(skill_id)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_project).collect()
                }
                .boxed()
            })
            .await
    }

    async fn search(&self, text: &str) -> AppResult<Vec<Project>> {
        self.session
            .with_tx(|tx| {
                let text = text.to_owned();
                async move {
                    // Literal substring match, no pattern characters.
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, title, description, live_url, repo_url, skill_ids,
                                created_at, updated_at
                            FROM
                                projects
                            WHERE strpos(lower(title), lower($1)) > 0
                               OR strpos(lower(description), lower($1)) > 0
                            ORDER BY created_at, id
                        "#,
                    )
                    .bind(&text)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_project).collect()
                }
                .boxed()
            })
            .await
    }
}
