#![cfg(test)]

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn clear_tables(pool: &PgPool) {
    sqlx::query("TRUNCATE profiles, projects, skills")
        .execute(pool)
        .await
        .expect("clear tables");
}

/// `offset` spaces creation times so insertion order is deterministic.
pub async fn insert_skill(pool: &PgPool, name: &str, level: &str, offset: i64) -> Uuid {
    let created_at = Utc::now() + Duration::milliseconds(offset);
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO skills (id, name, level, created_at, updated_at) VALUES ($1, $2, $3::skill_level, $4, $4) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(name)
    .bind(level)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert skill")
}

pub async fn insert_project(pool: &PgPool, title: &str, description: &str, skill_ids: &[Uuid], offset: i64) -> Uuid {
    let created_at = Utc::now() + Duration::milliseconds(offset);
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO projects (id, title, description, skill_ids, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $5) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(title)
    .bind(description)
    .bind(skill_ids)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert project")
}

pub async fn count_profiles(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .expect("count profiles")
}
