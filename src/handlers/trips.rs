use axum::{Json, extract::State};

use crate::{error::AppError, models::trip::Trip, state::AppState};

/// `GET /viagens` - scheduled trips.
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, AppError> {
    Ok(Json(state.trips.scheduled_trips().await?))
}
