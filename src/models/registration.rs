//! Registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{ENTRIES_PER_REGISTRATION, registration_status};

/// A paid entry into a contest, one per completed checkout
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub contest_id: Uuid,
    /// External payment reference, unique across registrations
    pub transaction_id: String,
    pub customer: String,
    pub status: String,
    pub creator: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Registration fields recorded when a checkout completes
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub contest_id: Uuid,
    pub transaction_id: String,
    pub customer: String,
    pub creator: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
}

impl NewRegistration {
    pub fn into_registration(self, now: DateTime<Utc>) -> Registration {
        Registration {
            id: Uuid::new_v4(),
            contest_id: self.contest_id,
            transaction_id: self.transaction_id,
            customer: self.customer,
            status: registration_status::PENDING.to_string(),
            creator: self.creator,
            name: self.name,
            category: self.category,
            quantity: ENTRIES_PER_REGISTRATION,
            price: self.price,
            image: self.image,
            created_at: now,
        }
    }
}

/// Outcome of recording a paid entry
#[derive(Debug, Clone, PartialEq)]
pub enum Claim {
    /// A new registration was inserted and the contest quantity decremented
    Created(Registration),
    /// The transaction was already recorded; nothing changed
    Existing(Registration),
}

impl Claim {
    pub fn registration(&self) -> &Registration {
        match self {
            Claim::Created(r) | Claim::Existing(r) => r,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Claim::Created(_))
    }
}
