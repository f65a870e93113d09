//! Scheduled trips. The list is fixed; dates are relative to the call time.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::{error::AppResult, models::trip::Trip};

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn scheduled_trips(&self) -> AppResult<Vec<Trip>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTripRepository;

#[async_trait]
impl TripRepository for StaticTripRepository {
    async fn scheduled_trips(&self) -> AppResult<Vec<Trip>> {
        let now = Utc::now();
        let trip = |id, client: &str, days, destination: &str, price, budget| Trip {
            id,
            client: client.to_string(),
            travel_date: now + Duration::days(days),
            destination: destination.to_string(),
            price: Decimal::new(price, 2),
            budget: Decimal::new(budget, 2),
        };

        Ok(vec![
            trip(1, "João", 1, "Paris", 350_050, 400_000),
            trip(2, "Maria", 5, "Londres", 420_000, 450_000),
            trip(3, "Carlos", 10, "Nova York", 500_075, 520_000),
        ])
    }
}
