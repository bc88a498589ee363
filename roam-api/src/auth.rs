use axum::http::HeaderMap;
use jsonwebtoken::{decode, DecodingKey, Validation};
use roam_core::identity::{AuthenticatedUser, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims the identity provider puts in its bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn decode_token(state: &AppState, token: &str) -> Result<AuthenticatedUser, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

    let id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid subject claim".to_string()))?;
    let role: UserRole = token_data
        .claims
        .role
        .parse()
        .map_err(|_| ApiError::Unauthorized("Invalid role claim".to_string()))?;

    Ok(AuthenticatedUser { id, role })
}

/// Require a valid bearer token.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser, ApiError> {
    let token =
        bearer_token(headers).ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;
    decode_token(state, token)
}

/// Guests are welcome: no header means no user, but a present-and-broken
/// token is still rejected.
pub fn authenticate_optional(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<AuthenticatedUser>, ApiError> {
    match bearer_token(headers) {
        Some(token) => decode_token(state, token).map(Some),
        None => Ok(None),
    }
}

/// Require an agency-role token.
pub fn require_agency(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser, ApiError> {
    let user = authenticate(state, headers)?;
    if !user.role.can_manage_bookings() {
        return Err(ApiError::Forbidden("Agency role required".to_string()));
    }
    Ok(user)
}
