pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod memory;
pub mod review_repo;
pub mod tour_repo;

pub use booking_repo::PgBookingRepository;
pub use database::DbClient;
pub use memory::MemoryStore;
pub use review_repo::PgReviewRepository;
pub use tour_repo::PgTourRepository;
