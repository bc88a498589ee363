use async_trait::async_trait;
use roam_core::BoxError;
use roam_rating::{Review, ReviewRepository};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    tour_id: Uuid,
    user_id: Uuid,
    rating: i32,
    comment: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            tour_id: row.tour_id,
            user_id: row.user_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create_review(&self, review: &Review) -> Result<(), BoxError> {
        sqlx::query(
            "INSERT INTO reviews (id, tour_id, user_id, rating, comment, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(review.id)
        .bind(review.tour_id)
        .bind(review.user_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_reviews_by_tour(&self, tour_id: Uuid) -> Result<Vec<Review>, BoxError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, tour_id, user_id, rating, comment, created_at \
             FROM reviews WHERE tour_id = $1 ORDER BY created_at",
        )
        .bind(tour_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}
