use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch},
    Json, Router,
};
use roam_booking::{Booking, NewBooking};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    tour_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    people_count: i32,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    tour_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings).post(create_booking))
        .route("/v1/bookings/{id}", get(get_booking))
        .route("/v1/bookings/{id}/status", patch(update_status))
}

async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    // Guest bookings carry no user id; a valid token links the booking to
    // its traveler.
    let user = auth::authenticate_optional(&state, &headers)?;

    let booking = state
        .bookings
        .create_booking(NewBooking {
            tour_id: req.tour_id,
            user_id: user.map(|u| u.id),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            people_count: req.people_count,
            notes: req.notes,
        })
        .await?;

    info!(booking_id = %booking.id, tour_id = %booking.tour_id, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    auth::require_agency(&state, &headers)?;

    let bookings = state.bookings.list_bookings(query.tour_id).await?;
    Ok(Json(bookings))
}

async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    auth::require_agency(&state, &headers)?;

    let booking = state.bookings.get_booking(id).await?;
    Ok(Json(booking))
}

async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Booking>, ApiError> {
    auth::require_agency(&state, &headers)?;

    let booking = state.bookings.update_status(id, &req.status).await?;
    info!(booking_id = %booking.id, status = %booking.status, "booking status updated");
    Ok(Json(booking))
}
