use crate::models::Review;
use async_trait::async_trait;
use roam_core::BoxError;
use uuid::Uuid;

/// Repository trait for review data access. Listings come back in insertion
/// order.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_review(&self, review: &Review) -> Result<(), BoxError>;

    async fn get_reviews_by_tour(&self, tour_id: Uuid) -> Result<Vec<Review>, BoxError>;
}
