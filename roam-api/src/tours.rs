use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use roam_catalog::{NewTour, Tour};
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/tours", get(list_tours).post(create_tour))
        .route("/v1/tours/{id}", get(get_tour))
}

async fn create_tour(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<NewTour>,
) -> Result<(StatusCode, Json<Tour>), ApiError> {
    let agency = auth::require_agency(&state, &headers)?;

    let tour = Tour::new(draft, Some(agency.id))?;
    state
        .tours
        .create_tour(&tour)
        .await
        .map_err(ApiError::storage)?;

    info!(tour_id = %tour.id, agency_id = %agency.id, "tour created");
    Ok((StatusCode::CREATED, Json(tour)))
}

async fn list_tours(State(state): State<AppState>) -> Result<Json<Vec<Tour>>, ApiError> {
    let tours = state.tours.list_tours().await.map_err(ApiError::storage)?;
    Ok(Json(tours))
}

async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, ApiError> {
    let tour = state
        .tours
        .get_tour(id)
        .await
        .map_err(ApiError::storage)?
        .ok_or_else(|| ApiError::NotFound(format!("Tour not found: {}", id)))?;
    Ok(Json(tour))
}
