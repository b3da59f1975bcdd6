pub mod config;
pub mod errors;
pub mod events;
pub mod game_session;
pub mod inventory;
pub mod word_pool;
pub mod words;

// Re-export main components
pub use config::*;
pub use errors::*;
pub use events::*;
pub use game_session::*;
pub use inventory::*;
pub use word_pool::*;
pub use words::*;

pub use holder_types::{GamePhase, GameRoundState, Item, SessionId, same_word};
