use async_trait::async_trait;
use roam_booking::{Booking, BookingRepository, BookingStatus};
use roam_core::pii::Masked;
use roam_core::BoxError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    tour_id: Uuid,
    user_id: Option<Uuid>,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    people_count: i32,
    notes: Option<String>,
    status: String,
    total_price: i32,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl BookingRow {
    fn into_booking(self) -> Result<Booking, BoxError> {
        let status: BookingStatus = self.status.parse()?;
        Ok(Booking {
            id: self.id,
            tour_id: self.tour_id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: Masked(self.email),
            phone: Masked(self.phone),
            people_count: self.people_count,
            notes: self.notes,
            status,
            total_price: self.total_price,
            created_at: self.created_at,
        })
    }
}

const SELECT_BOOKING: &str = "SELECT id, tour_id, user_id, first_name, last_name, email, phone, \
     people_count, notes, status, total_price, created_at FROM bookings";

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create_booking(&self, booking: &Booking) -> Result<(), BoxError> {
        sqlx::query(
            "INSERT INTO bookings (id, tour_id, user_id, first_name, last_name, email, phone, \
             people_count, notes, status, total_price, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(booking.id)
        .bind(booking.tour_id)
        .bind(booking.user_id)
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(booking.email.inner())
        .bind(booking.phone.inner())
        .bind(booking.people_count)
        .bind(&booking.notes)
        .bind(booking.status.to_string())
        .bind(booking.total_price)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, BoxError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookingRow::into_booking).transpose()
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BoxError> {
        let rows =
            sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} ORDER BY created_at"))
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    async fn get_bookings_by_tour(&self, tour_id: Uuid) -> Result<Vec<Booking>, BoxError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKING} WHERE tour_id = $1 ORDER BY created_at"
        ))
        .bind(tour_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, BoxError> {
        let row = sqlx::query_as::<_, BookingRow>(
            "UPDATE bookings SET status = $1 WHERE id = $2 \
             RETURNING id, tour_id, user_id, first_name, last_name, email, phone, \
             people_count, notes, status, total_price, created_at",
        )
        .bind(status.to_string())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(BookingRow::into_booking).transpose()
    }
}
