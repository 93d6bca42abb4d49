//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Contest database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub creator_email: String,
    pub creator_name: Option<String>,
    pub creator_image: Option<String>,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: f64,
    /// Remaining paid entries
    pub quantity: i32,
    pub description: Option<String>,
    pub prize_money: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub task_instruction: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    /// Check if any paid entries remain
    pub fn has_entries_left(&self) -> bool {
        self.quantity > 0
    }

    /// Check if the submission deadline has passed
    pub fn is_closed(&self) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= Utc::now())
    }
}

/// Contest fields supplied on creation
#[derive(Debug, Clone)]
pub struct NewContest {
    pub creator_email: String,
    pub creator_name: Option<String>,
    pub creator_image: Option<String>,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub prize_money: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub task_instruction: Option<String>,
}

impl NewContest {
    /// Materialize the record with a fresh id and timestamps
    pub fn into_contest(self, now: DateTime<Utc>) -> Contest {
        Contest {
            id: Uuid::new_v4(),
            creator_email: self.creator_email,
            creator_name: self.creator_name,
            creator_image: self.creator_image,
            name: self.name,
            category: self.category,
            image: self.image,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            prize_money: self.prize_money,
            deadline: self.deadline,
            task_instruction: self.task_instruction,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(quantity: i32, deadline: Option<DateTime<Utc>>) -> Contest {
        NewContest {
            creator_email: "host@example.com".into(),
            creator_name: None,
            creator_image: None,
            name: "Logo Design".into(),
            category: "design".into(),
            image: "https://img.example.com/logo.png".into(),
            price: 10.0,
            quantity,
            description: None,
            prize_money: None,
            deadline,
            task_instruction: None,
        }
        .into_contest(Utc::now())
    }

    #[test]
    fn test_entries_left() {
        assert!(sample(1, None).has_entries_left());
        assert!(!sample(0, None).has_entries_left());
    }

    #[test]
    fn test_deadline() {
        let past = Utc::now() - chrono::Duration::days(1);
        let future = Utc::now() + chrono::Duration::days(1);
        assert!(sample(1, Some(past)).is_closed());
        assert!(!sample(1, Some(future)).is_closed());
        assert!(!sample(1, None).is_closed());
    }
}
