//! Contest repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::store::ContestStore,
    error::AppResult,
    models::{Contest, NewContest},
};

/// Postgres-backed contest store
pub struct ContestRepository {
    pool: PgPool,
}

impl ContestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContestStore for ContestRepository {
    async fn insert(&self, contest: NewContest) -> AppResult<Contest> {
        let draft = contest.into_contest(Utc::now());

        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (
                id, creator_email, creator_name, creator_image, name, category,
                image, price, quantity, description, prize_money, deadline,
                task_instruction, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
            RETURNING *
            "#,
        )
        .bind(draft.id)
        .bind(&draft.creator_email)
        .bind(&draft.creator_name)
        .bind(&draft.creator_image)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(&draft.image)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.description)
        .bind(draft.prize_money)
        .bind(draft.deadline)
        .bind(&draft.task_instruction)
        .bind(draft.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(contest)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contest)
    }

    async fn list(&self) -> AppResult<Vec<Contest>> {
        let contests =
            sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests ORDER BY created_at DESC"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(contests)
    }

    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT * FROM contests
            WHERE creator_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(contests)
    }
}
