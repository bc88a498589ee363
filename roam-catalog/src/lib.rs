pub mod pricing;
pub mod repository;
pub mod tour;

pub use repository::TourRepository;
pub use tour::{NewTour, RoutePoint, Tour, TourError};
