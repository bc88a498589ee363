use async_trait::async_trait;
use roam_catalog::{RoutePoint, Tour, TourRepository};
use roam_core::BoxError;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgTourRepository {
    pool: PgPool,
}

impl PgTourRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct TourRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    duration: String,
    price: i32,
    max_people: i32,
    rating: i32,
    category: String,
    tags: Vec<String>,
    is_hot: bool,
    included: Vec<String>,
    excluded: Vec<String>,
    program: String,
    route: Option<Value>,
    agency_id: Option<Uuid>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TourRow {
    fn into_tour(self) -> Result<Tour, BoxError> {
        let route: Option<Vec<RoutePoint>> =
            self.route.map(serde_json::from_value).transpose()?;
        Ok(Tour {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            duration: self.duration,
            price: self.price,
            max_people: self.max_people,
            rating: self.rating,
            category: self.category,
            tags: self.tags,
            is_hot: self.is_hot,
            included: self.included,
            excluded: self.excluded,
            program: self.program,
            route,
            agency_id: self.agency_id,
            created_at: self.created_at,
        })
    }
}

const SELECT_TOUR: &str = "SELECT id, title, description, location, duration, price, max_people, \
     rating, category, tags, is_hot, included, excluded, program, route, agency_id, created_at \
     FROM tours";

#[async_trait]
impl TourRepository for PgTourRepository {
    async fn create_tour(&self, tour: &Tour) -> Result<(), BoxError> {
        let route = tour.route.as_ref().map(serde_json::to_value).transpose()?;

        sqlx::query(
            "INSERT INTO tours (id, title, description, location, duration, price, max_people, \
             rating, category, tags, is_hot, included, excluded, program, route, agency_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        )
        .bind(tour.id)
        .bind(&tour.title)
        .bind(&tour.description)
        .bind(&tour.location)
        .bind(&tour.duration)
        .bind(tour.price)
        .bind(tour.max_people)
        .bind(tour.rating)
        .bind(&tour.category)
        .bind(&tour.tags)
        .bind(tour.is_hot)
        .bind(&tour.included)
        .bind(&tour.excluded)
        .bind(&tour.program)
        .bind(route)
        .bind(tour.agency_id)
        .bind(tour.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, BoxError> {
        let row = sqlx::query_as::<_, TourRow>(&format!("{SELECT_TOUR} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TourRow::into_tour).transpose()
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, BoxError> {
        let rows = sqlx::query_as::<_, TourRow>(&format!("{SELECT_TOUR} ORDER BY created_at"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TourRow::into_tour).collect()
    }

    async fn update_tour_rating(&self, id: Uuid, rating: i32) -> Result<bool, BoxError> {
        let result = sqlx::query("UPDATE tours SET rating = $1 WHERE id = $2")
            .bind(rating)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
