//! In-memory store
//!
//! Backs the server when no database is configured and backs the test suite.
//! All tables sit behind one lock, so `claim` is atomic the same way the
//! Postgres transaction is.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    db::store::{ContestStore, RegistrationStore, UserStore},
    error::{AppError, AppResult},
    models::{Claim, Contest, NewContest, NewRegistration, Registration, User, UserProfile},
};

#[derive(Default)]
struct Tables {
    contests: HashMap<Uuid, Contest>,
    registrations: Vec<Registration>,
    users: HashMap<String, User>,
}

/// Shared in-process store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a contest, as an operator would directly in the database
    #[cfg(test)]
    pub async fn remove_contest(&self, id: &Uuid) -> Option<Contest> {
        self.tables.lock().await.contests.remove(id)
    }

    #[cfg(test)]
    pub async fn registration_count(&self) -> usize {
        self.tables.lock().await.registrations.len()
    }
}

fn newest_first<T, F>(mut items: Vec<T>, created_at: F) -> Vec<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    items
}

#[async_trait]
impl ContestStore for MemoryStore {
    async fn insert(&self, contest: NewContest) -> AppResult<Contest> {
        let contest = contest.into_contest(Utc::now());
        self.tables
            .lock()
            .await
            .contests
            .insert(contest.id, contest.clone());
        Ok(contest)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Contest>> {
        Ok(self.tables.lock().await.contests.get(id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Contest>> {
        let contests = self.tables.lock().await.contests.values().cloned().collect();
        Ok(newest_first(contests, |c: &Contest| c.created_at))
    }

    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Contest>> {
        let contests = self
            .tables
            .lock()
            .await
            .contests
            .values()
            .filter(|c| c.creator_email == email)
            .cloned()
            .collect();
        Ok(newest_first(contests, |c: &Contest| c.created_at))
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn find_by_transaction(&self, transaction_id: &str) -> AppResult<Option<Registration>> {
        Ok(self
            .tables
            .lock()
            .await
            .registrations
            .iter()
            .find(|r| r.transaction_id == transaction_id)
            .cloned())
    }

    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Registration>> {
        let registrations = self
            .tables
            .lock()
            .await
            .registrations
            .iter()
            .filter(|r| r.customer == email)
            .cloned()
            .collect();
        Ok(newest_first(registrations, |r: &Registration| r.created_at))
    }

    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Registration>> {
        let registrations = self
            .tables
            .lock()
            .await
            .registrations
            .iter()
            .filter(|r| r.creator == email)
            .cloned()
            .collect();
        Ok(newest_first(registrations, |r: &Registration| r.created_at))
    }

    async fn claim(&self, entry: NewRegistration) -> AppResult<Claim> {
        let mut tables = self.tables.lock().await;

        if let Some(existing) = tables
            .registrations
            .iter()
            .find(|r| r.transaction_id == entry.transaction_id)
        {
            return Ok(Claim::Existing(existing.clone()));
        }

        let contest = tables
            .contests
            .get_mut(&entry.contest_id)
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;
        if contest.quantity <= 0 {
            return Err(AppError::Conflict("Contest has no entries left".to_string()));
        }

        let now = Utc::now();
        contest.quantity -= 1;
        contest.updated_at = now;

        let registration = entry.into_registration(now);
        tables.registrations.push(registration.clone());
        Ok(Claim::Created(registration))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn upsert_login(&self, profile: UserProfile, now: DateTime<Utc>) -> AppResult<User> {
        let mut tables = self.tables.lock().await;

        let user = match tables.users.get_mut(&profile.email) {
            Some(user) => {
                user.last_login = now;
                if profile.name.is_some() {
                    user.name = profile.name;
                }
                if profile.image.is_some() {
                    user.image = profile.image;
                }
                user.clone()
            }
            None => {
                let user = profile.into_user(now);
                tables.users.insert(user.email.clone(), user.clone());
                user
            }
        };

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(email).cloned())
    }
}
