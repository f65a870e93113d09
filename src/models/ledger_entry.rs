//! Ledger entry data models and API request/response types.
//!
//! This module defines:
//! - `LedgerEntry`: stored ledger record
//! - `NewLedgerEntry`: validated payload for an insert
//! - `EntryKind`: the closed set of entry kinds
//! - Request bodies for the ledger endpoints
//!
//! JSON field names follow the public API (`descricao`, `valor`, ...),
//! while Rust field names describe the data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, models::dates};

/// Kind of a ledger entry: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Entrada,
    Saida,
}

impl EntryKind {
    /// All accepted kinds, in display order.
    pub const ALL: [EntryKind; 2] = [EntryKind::Entrada, EntryKind::Saida];

    /// Stored and displayed text of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Entrada => "Entrada",
            EntryKind::Saida => "Saída",
        }
    }

    /// Parse a kind from its exact text.
    ///
    /// Matching is case-sensitive and performs no trimming or accent
    /// folding: `"entrada"` and `"Saida"` are rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(ValidationError::InvalidKind)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger entry as stored.
///
/// # Database Table
///
/// Maps to the `ledger_entries` table. `kind` is kept as text so the row
/// mirrors the column; services only ever write the text of an
/// [`EntryKind`].
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct LedgerEntry {
    pub id: i32,

    #[serde(rename = "descricao")]
    pub description: String,

    /// Must be positive when written through the service.
    #[serde(rename = "valor", serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,

    /// `"Entrada"` or `"Saída"`
    #[serde(rename = "tipoFinanceiro")]
    pub kind: String,

    #[serde(rename = "dtVencimento")]
    pub due_date: DateTime<Utc>,

    #[serde(rename = "baixado")]
    pub settled: bool,

    #[serde(rename = "dtCadastro")]
    pub created_at: Option<DateTime<Utc>>,

    /// Set when the entry is settled, cleared when it is reopened.
    #[serde(rename = "dtBaixa")]
    pub settled_at: Option<DateTime<Utc>>,
}

/// A validated ledger entry that has not been stored yet.
///
/// The repository assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    pub description: String,
    pub amount: Decimal,
    pub kind: EntryKind,
    pub due_date: DateTime<Utc>,
    pub settled: bool,
    pub created_at: DateTime<Utc>,
}

impl NewLedgerEntry {
    /// Attach a storage id, producing the stored form.
    pub fn with_id(self, id: i32) -> LedgerEntry {
        LedgerEntry {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind.as_str().to_string(),
            due_date: self.due_date,
            settled: self.settled,
            created_at: Some(self.created_at),
            settled_at: None,
        }
    }
}

/// Request body for creating or fully updating a ledger entry.
///
/// # JSON Example
///
/// ```json
/// {
///   "descricao": "Aluguel",
///   "valor": 1500.00,
///   "tipoFinanceiro": "Saída",
///   "dtVencimento": "2025-01-10T00:00:00Z"
/// }
/// ```
///
/// `tipoFinanceiro` is kept as free text here so an unknown kind reaches
/// the service and is reported with the validation message rather than a
/// deserialization error. `valor` may be a number or a numeric string;
/// `dtVencimento` accepts the forms listed in [`dates`](super::dates).
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntryRequest {
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    #[serde(rename = "valor")]
    pub amount: Decimal,

    #[serde(rename = "tipoFinanceiro", default)]
    pub kind: String,

    #[serde(rename = "dtVencimento", deserialize_with = "dates::deserialize")]
    pub due_date: DateTime<Utc>,
}

/// Request body for `PUT /api/financeiro/{id}/baixar`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettleRequest {
    #[serde(rename = "baixado")]
    pub settled: bool,
}

/// Request body for `PUT /api/financeiro/{id}/vencimento`.
#[derive(Debug, Clone, Deserialize)]
pub struct DueDateRequest {
    #[serde(rename = "novaDataVencimento", deserialize_with = "dates::deserialize")]
    pub new_due_date: DateTime<Utc>,
}

/// Query string of `GET /api/financeiro/vencimentos`.
#[derive(Debug, Clone, Deserialize)]
pub struct DueRangeQuery {
    #[serde(rename = "dataInicio", deserialize_with = "dates::deserialize")]
    pub start: DateTime<Utc>,

    #[serde(rename = "dataFim", deserialize_with = "dates::deserialize")]
    pub end: DateTime<Utc>,
}
