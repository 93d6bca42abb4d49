//! User repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    db::store::UserStore,
    error::AppResult,
    models::{User, UserProfile},
};

/// Postgres-backed user store
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn upsert_login(&self, profile: UserProfile, now: DateTime<Utc>) -> AppResult<User> {
        let draft = profile.into_user(now);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, image, role, created_at, last_login)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (email) DO UPDATE
            SET
                last_login = EXCLUDED.last_login,
                name = COALESCE(EXCLUDED.name, users.name),
                image = COALESCE(EXCLUDED.image, users.image)
            RETURNING *
            "#,
        )
        .bind(draft.id)
        .bind(&draft.email)
        .bind(&draft.name)
        .bind(&draft.image)
        .bind(&draft.role)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
