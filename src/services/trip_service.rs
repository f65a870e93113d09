use std::sync::Arc;

use crate::{error::AppResult, models::trip::Trip, repositories::TripRepository};

#[derive(Clone)]
pub struct TripService {
    repo: Arc<dyn TripRepository>,
}

impl TripService {
    pub fn new(repo: Arc<dyn TripRepository>) -> Self {
        Self { repo }
    }

    /// Trips currently scheduled.
    pub async fn scheduled_trips(&self) -> AppResult<Vec<Trip>> {
        self.repo.scheduled_trips().await
    }
}
