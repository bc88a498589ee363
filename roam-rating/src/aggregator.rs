use crate::models::{NewReview, Review};
use crate::repository::ReviewRepository;
use roam_catalog::TourRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Ratings are stored scaled by 10 so the aggregate never carries a
/// fractional part (47 means 4.7).
const RATING_SCALE: f64 = 10.0;

/// Stored aggregate for a set of review ratings: `round(mean * 10)`, or 0
/// for an empty set. `f64::round` ties away from zero, the same convention
/// the price share uses.
pub fn aggregate_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i32 = ratings.iter().sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * RATING_SCALE).round() as i32
}

/// Keeps `Tour.rating` consistent with the tour's set of reviews.
///
/// Review persistence and rating recomputation are two separate effects,
/// not one transaction: two concurrent submissions may race on the
/// recompute and the last writer wins. No review record is ever lost by the
/// race, and the next recompute converges on the full set.
pub struct RatingAggregator {
    tours: Arc<dyn TourRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl RatingAggregator {
    pub fn new(tours: Arc<dyn TourRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { tours, reviews }
    }

    /// Persist a review, then synchronously recompute the parent tour's
    /// aggregate rating.
    ///
    /// The comment is opaque validated text; its minimum-length policy is
    /// owned by the HTTP boundary and is not re-checked here.
    pub async fn submit_review(&self, draft: NewReview) -> Result<Review, ReviewError> {
        if !(1..=5).contains(&draft.rating) {
            return Err(ReviewError::InvalidRating(draft.rating));
        }

        self.tours
            .get_tour(draft.tour_id)
            .await
            .map_err(ReviewError::unavailable)?
            .ok_or(ReviewError::TourNotFound(draft.tour_id))?;

        let review = Review::new(draft);
        self.reviews
            .create_review(&review)
            .await
            .map_err(ReviewError::unavailable)?;

        // The review is already persisted; a failed recompute (say, the tour
        // was deleted concurrently) must not fail the submission.
        if let Err(err) = self.recompute_tour_rating(review.tour_id).await {
            tracing::warn!(
                tour_id = %review.tour_id,
                error = %err,
                "rating recompute skipped after review creation"
            );
        }

        Ok(review)
    }

    /// Recompute and persist the aggregate from the tour's current review
    /// set. Idempotent: with no intervening review changes, repeated calls
    /// store the same value.
    pub async fn recompute_tour_rating(&self, tour_id: Uuid) -> Result<i32, ReviewError> {
        let reviews = self
            .reviews
            .get_reviews_by_tour(tour_id)
            .await
            .map_err(ReviewError::unavailable)?;
        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
        let rating = aggregate_rating(&ratings);

        let updated = self
            .tours
            .update_tour_rating(tour_id, rating)
            .await
            .map_err(ReviewError::unavailable)?;
        if !updated {
            return Err(ReviewError::TourNotFound(tour_id));
        }

        Ok(rating)
    }

    pub async fn list_reviews_for_tour(&self, tour_id: Uuid) -> Result<Vec<Review>, ReviewError> {
        self.reviews
            .get_reviews_by_tour(tour_id)
            .await
            .map_err(ReviewError::unavailable)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Tour not found: {0}")]
    TourNotFound(Uuid),

    #[error("Rating {0} is out of bounds, allowed 1..=5")]
    InvalidRating(i32),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl ReviewError {
    fn unavailable(err: roam_core::BoxError) -> Self {
        ReviewError::Unavailable(err.to_string())
    }
}
