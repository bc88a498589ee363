use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use roam_rating::{NewReview, Review};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

/// Minimum comment length, enforced here at the boundary. The rating core
/// accepts the comment as opaque validated text and does not re-check it.
pub const MIN_COMMENT_CHARS: usize = 10;

#[derive(Debug, Deserialize)]
struct CreateReviewRequest {
    rating: i32,
    comment: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/tours/{id}/reviews", get(list_reviews).post(create_review))
}

async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(tour_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let user = auth::authenticate(&state, &headers)?;

    let comment = req.comment.trim().to_string();
    if comment.chars().count() < MIN_COMMENT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Comment must be at least {} characters",
            MIN_COMMENT_CHARS
        )));
    }

    let review = state
        .ratings
        .submit_review(NewReview {
            tour_id,
            user_id: user.id,
            rating: req.rating,
            comment,
        })
        .await?;

    info!(review_id = %review.id, tour_id = %tour_id, "review submitted");
    Ok((StatusCode::CREATED, Json(review)))
}

async fn list_reviews(
    State(state): State<AppState>,
    Path(tour_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.ratings.list_reviews_for_tour(tour_id).await?;
    Ok(Json(reviews))
}
