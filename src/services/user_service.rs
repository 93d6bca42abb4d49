//! User service

use chrono::Utc;

use crate::{
    db::UserStore,
    error::AppResult,
    handlers::users::{request::UpsertUserRequest, response::UserResponse},
    models::UserProfile,
    utils::normalize_email,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Record a login, creating the user with the default role on first sight
    pub async fn upsert_login(
        store: &dyn UserStore,
        payload: UpsertUserRequest,
    ) -> AppResult<UserResponse> {
        let profile = UserProfile {
            email: normalize_email(&payload.email),
            name: payload.name,
            image: payload.image,
        };

        let user = store.upsert_login(profile, Utc::now()).await?;
        tracing::debug!("User {} logged in", user.email);

        Ok(user.into())
    }

    /// Role of the user with this email, if they ever logged in
    pub async fn get_role(store: &dyn UserStore, email: &str) -> AppResult<Option<String>> {
        let user = store.find_by_email(&normalize_email(email)).await?;
        Ok(user.map(|u| u.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn login(email: &str, name: Option<&str>) -> UpsertUserRequest {
        UpsertUserRequest {
            email: email.into(),
            name: name.map(Into::into),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_first_login_creates_customer() {
        let store = MemoryStore::new();

        let user = UserService::upsert_login(&store, login("Ada@Example.com", Some("Ada")))
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, "customer");
        assert_eq!(user.created_at, user.last_login);
    }

    #[tokio::test]
    async fn test_repeat_login_keeps_created_at() {
        let store = MemoryStore::new();

        let first = UserService::upsert_login(&store, login("ada@example.com", Some("Ada")))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = UserService::upsert_login(&store, login("ada@example.com", None))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert!(second.last_login > first.last_login);
        assert_eq!(second.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_role_lookup() {
        let store = MemoryStore::new();
        UserService::upsert_login(&store, login("ada@example.com", None))
            .await
            .unwrap();

        assert_eq!(
            UserService::get_role(&store, "ADA@example.com").await.unwrap(),
            Some("customer".to_string())
        );
        assert_eq!(
            UserService::get_role(&store, "nobody@example.com").await.unwrap(),
            None
        );
    }
}
