use roam_booking::BookingManager;
use roam_catalog::TourRepository;
use roam_rating::RatingAggregator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub tours: Arc<dyn TourRepository>,
    pub bookings: Arc<BookingManager>,
    pub ratings: Arc<RatingAggregator>,
    pub auth: AuthConfig,
}
