use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rating and comment left for one tour by one authenticated user.
///
/// Reviews are append-only in this core: never updated, never deleted.
/// Nothing enforces one review per (user, tour); repeat reviews are a
/// policy decision left to the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a review. The comment arrives already validated by
/// the boundary layer and is opaque here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub tour_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

impl Review {
    pub fn new(draft: NewReview) -> Self {
        Self {
            id: Uuid::new_v4(),
            tour_id: draft.tour_id,
            user_id: draft.user_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: Utc::now(),
        }
    }
}
