use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A stocked item. Two items are the same entry when their names match
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Case-insensitive name comparison used for merging.
    pub fn same_name(&self, name: &str) -> bool {
        crate::same_word(&self.name, name)
    }

    /// Returns a new item with `extra` added to the quantity, keeping this
    /// item's spelling of the name.
    pub fn with_added_quantity(&self, extra: u32) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity.saturating_add(extra),
        }
    }
}
