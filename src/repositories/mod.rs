//! Storage layer.
//!
//! Repositories persist and retrieve entities; they assign ids and perform
//! no validation.

pub mod ledger;
pub mod memory_ledger;
pub mod pg_ledger;
pub mod stock;
pub mod trip;

pub use ledger::LedgerRepository;
pub use memory_ledger::InMemoryLedgerRepository;
pub use pg_ledger::PgLedgerRepository;
pub use stock::{InMemoryStockRepository, StockRepository};
pub use trip::{StaticTripRepository, TripRepository};
