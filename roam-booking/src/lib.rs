pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{BookingError, BookingManager};
pub use models::{Booking, BookingStatus, NewBooking};
pub use repository::BookingRepository;
