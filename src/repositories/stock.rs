//! Stock storage: the repository contract and its in-memory store.

use std::sync::{PoisonError, RwLock};

use crate::models::stock_entry::{NewStockEntry, StockEntry};

/// Storage for stock counters. Calls are synchronous.
pub trait StockRepository: Send + Sync {
    /// First counter stored for `item_id`, if any.
    fn find_by_item_id(&self, item_id: i32) -> Option<StockEntry>;

    /// Store a new counter and return it with its assigned id.
    fn insert(&self, entry: NewStockEntry) -> StockEntry;

    /// Overwrite the quantity of the counter with the same id.
    fn update(&self, entry: &StockEntry);
}

/// Stock counters kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStockRepository {
    entries: RwLock<Vec<StockEntry>>,
}

impl InMemoryStockRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo catalogue.
    pub fn seeded() -> Self {
        let fixtures = [
            (1, "Teclado Mecânico", 50),
            (2, "Mouse Gamer", 20),
            (3, "Monitor 27''", 10),
        ];

        let entries = fixtures
            .into_iter()
            .map(|(id, name, quantity)| StockEntry {
                id,
                item_id: id,
                item_name: name.to_string(),
                quantity_on_hand: quantity,
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl StockRepository for InMemoryStockRepository {
    fn find_by_item_id(&self, item_id: i32) -> Option<StockEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|e| e.item_id == item_id)
            .cloned()
    }

    fn insert(&self, entry: NewStockEntry) -> StockEntry {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let stored = entry.with_id(id);
        entries.push(stored.clone());
        stored
    }

    fn update(&self, entry: &StockEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.iter_mut().find(|e| e.id == entry.id) {
            existing.quantity_on_hand = entry.quantity_on_hand;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_catalogue() {
        let repo = InMemoryStockRepository::seeded();
        let keyboard = repo.find_by_item_id(1).unwrap();
        assert_eq!(keyboard.item_name, "Teclado Mecânico");
        assert_eq!(keyboard.quantity_on_hand, 50);
        assert!((1..=3).all(|item_id| repo.find_by_item_id(item_id).is_some()));
        assert!(repo.find_by_item_id(4).is_none());
    }

    #[test]
    fn insert_assigns_next_id() {
        let repo = InMemoryStockRepository::seeded();
        let stored = repo.insert(NewStockEntry {
            item_id: 42,
            item_name: "Headset".to_string(),
            quantity_on_hand: 3,
        });
        assert_eq!(stored.id, 4);

        let empty = InMemoryStockRepository::new();
        let first = empty.insert(NewStockEntry {
            item_id: 42,
            item_name: "Headset".to_string(),
            quantity_on_hand: 3,
        });
        assert_eq!(first.id, 1);
    }

    #[test]
    fn update_only_touches_quantity() {
        let repo = InMemoryStockRepository::seeded();
        let mut mouse = repo.find_by_item_id(2).unwrap();
        mouse.quantity_on_hand = 7;
        mouse.item_name = "Renamed".to_string();
        repo.update(&mouse);

        let stored = repo.find_by_item_id(2).unwrap();
        assert_eq!(stored.quantity_on_hand, 7);
        assert_eq!(stored.item_name, "Mouse Gamer");
    }
}
