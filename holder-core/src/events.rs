use holder_types::{Item, SessionId};

/// Notifications from a `WordGameSession`. None of them carry the target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        scrambled_word: String,
    },
    GuessUpdated {
        session_id: SessionId,
    },
    GuessRejected {
        session_id: SessionId,
        word_count: u32,
    },
    GuessAccepted {
        session_id: SessionId,
        score: u32,
    },
    WordSkipped {
        session_id: SessionId,
        word_count: u32,
    },
    RoundAdvanced {
        session_id: SessionId,
        word_count: u32,
        scrambled_word: String,
    },
    GameOver {
        session_id: SessionId,
        final_score: u32,
        rounds_played: u32,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::GameStarted { session_id, .. }
            | GameEvent::GuessUpdated { session_id }
            | GameEvent::GuessRejected { session_id, .. }
            | GameEvent::GuessAccepted { session_id, .. }
            | GameEvent::WordSkipped { session_id, .. }
            | GameEvent::RoundAdvanced { session_id, .. }
            | GameEvent::GameOver { session_id, .. } => *session_id,
        }
    }
}

/// Notifications from an `InventoryLedger`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    UserNameSet {
        ledger_id: SessionId,
        user_name: String,
    },
    ItemAdded {
        ledger_id: SessionId,
        item: Item,
    },
    ItemMerged {
        ledger_id: SessionId,
        item: Item,
        previous_quantity: u32,
    },
}

impl LedgerEvent {
    pub fn ledger_id(&self) -> SessionId {
        match self {
            LedgerEvent::UserNameSet { ledger_id, .. }
            | LedgerEvent::ItemAdded { ledger_id, .. }
            | LedgerEvent::ItemMerged { ledger_id, .. } => *ledger_id,
        }
    }
}

/// Event handler trait for observers of a state holder
pub trait EventHandler<E> {
    fn handle_event(&mut self, event: &E);
}

/// Simple event bus fanning events out to every registered handler
pub struct EventBus<E> {
    handlers: Vec<Box<dyn EventHandler<E>>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn EventHandler<E>>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: E) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
