//! Data models for stored entities and API request/response types.

/// Request timestamp parsing
pub mod dates;

/// Ledger entries (financeiro)
pub mod ledger_entry;
/// Stock counters (estoque)
pub mod stock_entry;
/// Scheduled trips (viagens)
pub mod trip;
