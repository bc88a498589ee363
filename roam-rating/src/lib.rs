pub mod aggregator;
pub mod models;
pub mod repository;

pub use aggregator::{aggregate_rating, RatingAggregator, ReviewError};
pub use models::{NewReview, Review};
pub use repository::ReviewRepository;
