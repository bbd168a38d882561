use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::skill::SkillReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::skill::{Skill, SkillLevel, SkillUsage};

#[derive(Clone)]
pub struct SkillGateway {
    session: SqlxSession,
}

impl SkillGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_skill(row: &PgRow) -> AppResult<Skill> {
        let level: String = row.try_get("level")?;

        Ok(Skill {
            id: Id::new(row.try_get("id")?),
            name: row.try_get("name")?,
            level: level.parse::<SkillLevel>()?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl SkillReader for SkillGateway {
    async fn get_all(&self) -> AppResult<Vec<Skill>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, name, level::text AS level, created_at, updated_at
                            FROM
                                skills
                            ORDER BY name COLLATE "C" ASC
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_skill).collect()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Skill>> {
        self.session
            .with_tx(|tx| {
                let name = name.to_owned();
                async move {
                    // Names that differ only by case resolve to the earliest skill.
                    let row = sqlx::query(
                        r#"
                            SELECT
                                id, name, level::text AS level, created_at, updated_at
                            FROM
                                skills
                            WHERE lower(name) = lower($1)
                            ORDER BY created_at, id
                            LIMIT 1
                        "#,
                    )
                    .bind(&name)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_skill).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_ids(&self, ids: &[Id<Skill>]) -> AppResult<Vec<Skill>> {
        self.session
            .with_tx(|tx| {
                let ids: Vec<Uuid> = ids.iter().map(|id| id.value).collect();
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, name, level::text AS level, created_at, updated_at
                            FROM
                                skills
                            WHERE id = ANY($1)
                        "#,
                    )
                    .bind(&ids)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_skill).collect()
                }
                .boxed()
            })
            .await
    }

    async fn top_by_usage(&self, limit: i64) -> AppResult<Vec<SkillUsage>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                s.id, s.name, s.level::text AS level, s.created_at, s.updated_at,
                                usage_counts.count
                            FROM (
                                SELECT refs.skill_id, COUNT(DISTINCT refs.project_id) AS count
                                FROM (
                                    SELECT p.id AS project_id, unnest(p.skill_ids) AS skill_id
                                    FROM projects p
                                ) AS refs
                                GROUP BY refs.skill_id
                            ) AS usage_counts
                            JOIN skills s ON s.id = usage_counts.skill_id
                            ORDER BY usage_counts.count DESC, s.name COLLATE "C" ASC
                            LIMIT $1
                        "#,
                    )
                    .bind(limit)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter()
                        .map(|row| {
                            Ok(SkillUsage {
                                skill: Self::get_skill(row)?,
                                count: row.try_get("count")?,
                            })
                        })
                        .collect()
                }
                .boxed()
            })
            .await
    }
}
