use crate::models::{Booking, BookingStatus};
use async_trait::async_trait;
use roam_core::BoxError;
use uuid::Uuid;

/// Repository trait for booking data access.
///
/// Listings come back in insertion order. `update_booking_status` touches
/// the status field only and returns the updated booking, or `None` when no
/// such booking exists.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(&self, booking: &Booking) -> Result<(), BoxError>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError>;

    async fn list_bookings(&self) -> Result<Vec<Booking>, BoxError>;

    async fn get_bookings_by_tour(&self, tour_id: Uuid) -> Result<Vec<Booking>, BoxError>;

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, BoxError>;
}
