//! Stock service - per-item quantity counters.
//!
//! Quantities are plain signed arithmetic: a negative quantity passed to
//! [`StockService::add_to_stock`] lowers stock, and a negative quantity
//! passed to [`StockService::deliver_from_stock`] raises it. Neither is
//! rejected. Arithmetic wraps on `i32` overflow in every build profile.

use std::sync::Arc;

use crate::{
    models::stock_entry::{NewStockEntry, StockSlot},
    repositories::StockRepository,
};

#[derive(Clone)]
pub struct StockService {
    repo: Arc<dyn StockRepository>,
}

impl StockService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    fn lookup(&self, item_id: i32, item_name: &str) -> StockSlot {
        match self.repo.find_by_item_id(item_id) {
            Some(entry) => StockSlot::Existing(entry),
            None => StockSlot::New(NewStockEntry {
                item_id,
                item_name: item_name.to_string(),
                quantity_on_hand: 0,
            }),
        }
    }

    /// Add `quantity` to the counter of `item_id`, creating it at zero
    /// with `item_name` if the item has never been stocked.
    pub fn add_to_stock(&self, item_id: i32, item_name: &str, quantity: i32) {
        let mut slot = self.lookup(item_id, item_name);
        let on_hand = slot.quantity_mut();
        *on_hand = on_hand.wrapping_add(quantity);

        match slot {
            StockSlot::New(entry) => {
                let stored = self.repo.insert(entry);
                tracing::info!(
                    item_id,
                    stock_id = stored.id,
                    quantity = stored.quantity_on_hand,
                    "stock entry created"
                );
            }
            StockSlot::Existing(entry) => {
                self.repo.update(&entry);
                tracing::info!(
                    item_id,
                    quantity = entry.quantity_on_hand,
                    "stock entry updated"
                );
            }
        }
    }

    /// Remove `quantity` from the counter of `item_id`.
    ///
    /// Returns `false` without touching storage when the item is unknown or
    /// holds less than `quantity`.
    pub fn deliver_from_stock(&self, item_id: i32, quantity: i32) -> bool {
        let Some(mut entry) = self.repo.find_by_item_id(item_id) else {
            tracing::debug!(item_id, "delivery for unknown item");
            return false;
        };

        if entry.quantity_on_hand < quantity {
            tracing::debug!(
                item_id,
                on_hand = entry.quantity_on_hand,
                requested = quantity,
                "insufficient stock"
            );
            return false;
        }

        entry.quantity_on_hand = entry.quantity_on_hand.wrapping_sub(quantity);
        self.repo.update(&entry);
        tracing::info!(item_id, quantity = entry.quantity_on_hand, "stock delivered");
        true
    }
}
