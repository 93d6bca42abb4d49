//! Registration repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::{
    db::store::RegistrationStore,
    error::{AppError, AppResult},
    models::{Claim, NewRegistration, Registration},
};

/// Postgres-backed registration store
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for RegistrationRepository {
    async fn find_by_transaction(&self, transaction_id: &str) -> AppResult<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registered_contests WHERE transaction_id = $1"#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT * FROM registered_contests
            WHERE customer = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT * FROM registered_contests
            WHERE creator = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    async fn claim(&self, entry: NewRegistration) -> AppResult<Claim> {
        let draft = entry.into_registration(Utc::now());
        let mut tx = self.pool.begin().await?;

        // The unique index on transaction_id serializes concurrent claims:
        // the loser waits for the winner to commit and then inserts nothing.
        let inserted = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registered_contests (
                id, contest_id, transaction_id, customer, status, creator,
                name, category, quantity, price, image, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (transaction_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(draft.id)
        .bind(draft.contest_id)
        .bind(&draft.transaction_id)
        .bind(&draft.customer)
        .bind(&draft.status)
        .bind(&draft.creator)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(&draft.image)
        .bind(draft.created_at)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(registration) = inserted else {
            let existing = sqlx::query_as::<_, Registration>(
                r#"SELECT * FROM registered_contests WHERE transaction_id = $1"#,
            )
            .bind(&draft.transaction_id)
            .fetch_one(&mut *tx)
            .await?;
            tx.commit().await?;
            return Ok(Claim::Existing(existing));
        };

        let decremented = sqlx::query(
            r#"
            UPDATE contests
            SET quantity = quantity - 1, updated_at = NOW()
            WHERE id = $1 AND quantity > 0
            "#,
        )
        .bind(registration.contest_id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::Conflict("Contest has no entries left".to_string()));
        }

        tx.commit().await?;
        Ok(Claim::Created(registration))
    }
}
