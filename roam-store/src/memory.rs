use async_trait::async_trait;
use roam_booking::{Booking, BookingRepository, BookingStatus};
use roam_catalog::{Tour, TourRepository};
use roam_core::BoxError;
use roam_rating::{Review, ReviewRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory repository backend.
///
/// Same contract as the Postgres store: keyed records, single-record
/// atomicity, insertion order for listings. Locks are scoped to one map
/// operation and never held across an await.
#[derive(Default)]
pub struct MemoryStore {
    tours: RwLock<HashMap<Uuid, Tour>>,
    bookings: RwLock<Vec<Booking>>,
    reviews: RwLock<Vec<Review>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TourRepository for MemoryStore {
    async fn create_tour(&self, tour: &Tour) -> Result<(), BoxError> {
        self.tours.write().await.insert(tour.id, tour.clone());
        Ok(())
    }

    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, BoxError> {
        Ok(self.tours.read().await.get(&id).cloned())
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, BoxError> {
        let mut tours: Vec<Tour> = self.tours.read().await.values().cloned().collect();
        tours.sort_by_key(|t| t.created_at);
        Ok(tours)
    }

    async fn update_tour_rating(&self, id: Uuid, rating: i32) -> Result<bool, BoxError> {
        match self.tours.write().await.get_mut(&id) {
            Some(tour) => {
                tour.rating = rating;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create_booking(&self, booking: &Booking) -> Result<(), BoxError> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BoxError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn get_bookings_by_tour(&self, tour_id: Uuid) -> Result<Vec<Booking>, BoxError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.tour_id == tour_id)
            .cloned()
            .collect())
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, BoxError> {
        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn create_review(&self, review: &Review) -> Result<(), BoxError> {
        self.reviews.write().await.push(review.clone());
        Ok(())
    }

    async fn get_reviews_by_tour(&self, tour_id: Uuid) -> Result<Vec<Review>, BoxError> {
        Ok(self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.tour_id == tour_id)
            .cloned()
            .collect())
    }
}
