//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::{
    repositories::{LedgerRepository, StaticTripRepository, StockRepository},
    services::{LedgerService, StockService, TripService},
};

#[derive(Clone)]
pub struct AppState {
    pub ledger: LedgerService,
    pub stock: StockService,
    pub trips: TripService,
}

impl AppState {
    /// Wire services over the given stores. Trips always come from the
    /// static list.
    pub fn new(ledger: Arc<dyn LedgerRepository>, stock: Arc<dyn StockRepository>) -> Self {
        Self {
            ledger: LedgerService::new(ledger),
            stock: StockService::new(stock),
            trips: TripService::new(Arc::new(StaticTripRepository)),
        }
    }
}
