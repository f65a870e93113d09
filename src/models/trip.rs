//! Scheduled trip model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A scheduled trip as returned by `GET /viagens`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: i32,

    #[serde(rename = "cliente")]
    pub client: String,

    #[serde(rename = "dtViagem")]
    pub travel_date: DateTime<Utc>,

    #[serde(rename = "destino")]
    pub destination: String,

    #[serde(rename = "preco", serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,

    #[serde(rename = "orcamento", serialize_with = "rust_decimal::serde::float::serialize")]
    pub budget: Decimal,
}
