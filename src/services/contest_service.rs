//! Contest service

use crate::{
    db::ContestStore,
    error::{AppError, AppResult},
    handlers::contests::{request::CreateContestRequest, response::ContestResponse},
    models::NewContest,
    utils::normalize_email,
};
use uuid::Uuid;

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a new contest
    pub async fn create_contest(
        store: &dyn ContestStore,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        let contest = store
            .insert(NewContest {
                creator_email: normalize_email(&payload.creator.email),
                creator_name: payload.creator.name,
                creator_image: payload.creator.image,
                name: payload.name,
                category: payload.category,
                image: payload.image,
                price: payload.price,
                quantity: payload.quantity,
                description: payload.description,
                prize_money: payload.prize_money,
                deadline: payload.deadline,
                task_instruction: payload.task_instruction,
            })
            .await?;

        tracing::info!(contest_id = %contest.id, creator = %contest.creator_email, "Contest created");

        Ok(contest.into())
    }

    /// List all contests
    pub async fn list_contests(store: &dyn ContestStore) -> AppResult<Vec<ContestResponse>> {
        let contests = store.list().await?;
        Ok(contests.into_iter().map(Into::into).collect())
    }

    /// Get contest by ID
    pub async fn get_contest(store: &dyn ContestStore, id: &Uuid) -> AppResult<ContestResponse> {
        let contest = store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Ok(contest.into())
    }

    /// Contests hosted by a creator
    pub async fn list_by_creator(
        store: &dyn ContestStore,
        email: &str,
    ) -> AppResult<Vec<ContestResponse>> {
        let contests = store.list_by_creator(&normalize_email(email)).await?;
        Ok(contests.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::MemoryStore, handlers::contests::request::CreatorInfo};

    fn request(creator: &str) -> CreateContestRequest {
        CreateContestRequest {
            name: "Photo Hunt".into(),
            category: "photography".into(),
            image: "https://img.example.com/p.png".into(),
            price: 5.0,
            quantity: 10,
            description: Some("Best sunset shot".into()),
            prize_money: Some(100.0),
            deadline: None,
            task_instruction: None,
            creator: CreatorInfo {
                email: creator.into(),
                name: Some("Host".into()),
                image: None,
            },
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryStore::new();

        let created = ContestService::create_contest(&store, request("Host@Example.com"))
            .await
            .unwrap();
        assert_eq!(created.creator.email, "host@example.com");

        let fetched = ContestService::get_contest(&store, &created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Photo Hunt");
        assert_eq!(fetched.category, "photography");
        assert_eq!(fetched.quantity, 10);
        assert_eq!(fetched.description.as_deref(), Some("Best sunset shot"));
    }

    #[tokio::test]
    async fn test_get_missing_contest() {
        let store = MemoryStore::new();
        let err = ContestService::get_contest(&store, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_by_creator_ignores_case() {
        let store = MemoryStore::new();
        ContestService::create_contest(&store, request("host@example.com"))
            .await
            .unwrap();
        ContestService::create_contest(&store, request("other@example.com"))
            .await
            .unwrap();

        let mine = ContestService::list_by_creator(&store, "HOST@example.com")
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(ContestService::list_contests(&store).await.unwrap().len(), 2);
    }
}
