use crate::tour::Tour;
use async_trait::async_trait;
use roam_core::BoxError;
use uuid::Uuid;

/// Repository trait for tour data access.
///
/// Absence is reported through `Option`/`bool`; callers decide whether a
/// missing record is an error. `BoxError` is reserved for storage faults.
#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn create_tour(&self, tour: &Tour) -> Result<(), BoxError>;

    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, BoxError>;

    async fn list_tours(&self) -> Result<Vec<Tour>, BoxError>;

    /// Persist a recomputed aggregate rating. Returns `false` when the tour
    /// no longer exists, so the aggregator can skip-and-log instead of
    /// failing the review path.
    async fn update_tour_rating(&self, id: Uuid, rating: i32) -> Result<bool, BoxError>;
}
