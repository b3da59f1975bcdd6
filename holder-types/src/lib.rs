pub mod game;
pub mod inventory;

// Re-export all types
pub use game::*;
pub use inventory::*;

use uuid::Uuid;

pub type SessionId = Uuid;

/// Case-insensitive comparison shared by item names, guesses and scrambles.
pub fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
