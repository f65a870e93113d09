//! Stock data models and API request types.

use serde::Deserialize;

/// Stock counter for a single item.
///
/// At most one entry exists per `item_id`. `quantity_on_hand` is signed
/// and nothing prevents it from going negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub id: i32,
    pub item_id: i32,
    pub item_name: String,
    pub quantity_on_hand: i32,
}

/// Stock counter that has not been stored yet. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStockEntry {
    pub item_id: i32,
    pub item_name: String,
    pub quantity_on_hand: i32,
}

impl NewStockEntry {
    pub fn with_id(self, id: i32) -> StockEntry {
        StockEntry {
            id,
            item_id: self.item_id,
            item_name: self.item_name,
            quantity_on_hand: self.quantity_on_hand,
        }
    }
}

/// Outcome of looking up the stock counter of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockSlot {
    /// No counter exists yet; it will be inserted.
    New(NewStockEntry),
    /// Counter already stored; it will be updated.
    Existing(StockEntry),
}

impl StockSlot {
    /// Mutable access to the quantity, whichever variant this is.
    pub fn quantity_mut(&mut self) -> &mut i32 {
        match self {
            StockSlot::New(entry) => &mut entry.quantity_on_hand,
            StockSlot::Existing(entry) => &mut entry.quantity_on_hand,
        }
    }
}

/// Query string of `POST /api/estoque/adicionar`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddStockQuery {
    #[serde(rename = "itemId")]
    pub item_id: i32,

    #[serde(rename = "nomeItem", default)]
    pub item_name: String,

    #[serde(rename = "quantidade")]
    pub quantity: i32,
}

/// Query string of `POST /api/estoque/entregar`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliverStockQuery {
    #[serde(rename = "itemId")]
    pub item_id: i32,

    #[serde(rename = "quantidade")]
    pub quantity: i32,
}
