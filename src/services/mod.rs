//! Business logic services.
//!
//! Services contain the validation and mutation rules, separated from the
//! HTTP handlers and from storage.

pub mod ledger_service;
pub mod stock_service;
pub mod trip_service;

pub use ledger_service::LedgerService;
pub use stock_service::StockService;
pub use trip_service::TripService;
