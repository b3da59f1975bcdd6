use holder_types::{Item, SessionId};
use tracing::debug;
use uuid::Uuid;

use crate::{EventBus, LedgerEvent};

/// The signed-in user's name plus their stocked items, in the order the
/// items were first added. Holds at most one item per case-insensitive name.
#[derive(Debug)]
pub struct InventoryLedger {
    id: SessionId,
    user_name: String,
    items: Vec<Item>,
    pub event_bus: EventBus<LedgerEvent>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: String::new(),
            items: Vec::new(),
            event_bus: EventBus::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Store the trimmed name. Any input is accepted, including an empty one.
    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = name.trim().to_string();
        debug!(ledger_id = %self.id, "User name set");

        self.event_bus.publish(LedgerEvent::UserNameSet {
            ledger_id: self.id,
            user_name: self.user_name.clone(),
        });
    }

    /// Upsert by name. A name already present (ignoring case) has its
    /// quantity increased in place; otherwise the item is appended.
    pub fn add_item(&mut self, candidate: Item) {
        let existing = self
            .items
            .iter()
            .position(|item| item.same_name(&candidate.name));

        let event = match existing {
            Some(index) => {
                let previous_quantity = self.items[index].quantity;
                let merged = self.items[index].with_added_quantity(candidate.quantity);
                debug!(
                    ledger_id = %self.id,
                    name = %merged.name,
                    previous_quantity,
                    quantity = merged.quantity,
                    "Merged item quantity"
                );
                self.items[index] = merged.clone();
                LedgerEvent::ItemMerged {
                    ledger_id: self.id,
                    item: merged,
                    previous_quantity,
                }
            }
            None => {
                debug!(
                    ledger_id = %self.id,
                    name = %candidate.name,
                    quantity = candidate.quantity,
                    "Added new item"
                );
                self.items.push(candidate.clone());
                LedgerEvent::ItemAdded {
                    ledger_id: self.id,
                    item: candidate,
                }
            }
        };

        self.event_bus.publish(event);
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.same_name(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}
