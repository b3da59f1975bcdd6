#![allow(dead_code)]

use holder_core::{EventHandler, GameConfig, WordGameSession, WordPool};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Words whose letter sets are all different, so a scramble identifies its word.
pub const TEST_WORDS: &[&str] = &[
    "apple", "banana", "cherry", "tests", "valid", "hello", "world", "house", "mouse", "train",
    "plane", "water", "stone", "bread", "cream",
];

pub const TEST_SCORE_INCREMENT: u32 = 20;

/// Creates a test WordPool with a known set of words
pub fn create_test_pool() -> WordPool {
    WordPool::new(TEST_WORDS).unwrap()
}

/// Creates a seeded session over the test pool
pub fn create_seeded_session(max_rounds: u32, seed: u64) -> WordGameSession<StdRng> {
    create_session_with_words(TEST_WORDS, max_rounds, seed)
}

/// Creates a seeded session over an arbitrary word list
pub fn create_session_with_words(
    words: &[&str],
    max_rounds: u32,
    seed: u64,
) -> WordGameSession<StdRng> {
    let pool = WordPool::new(words).unwrap();
    let config = GameConfig::new(max_rounds, TEST_SCORE_INCREMENT);
    WordGameSession::new(pool, config, StdRng::seed_from_u64(seed)).unwrap()
}

pub fn sorted_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.to_lowercase().chars().collect();
    letters.sort_unstable();
    letters
}

/// Find the pool word a scramble was made from
pub fn solve(pool: &WordPool, scrambled: &str) -> Option<String> {
    let letters = sorted_letters(scrambled);
    pool.words()
        .iter()
        .find(|word| sorted_letters(word) == letters)
        .cloned()
}

/// Submit the right answer for the current round
pub fn guess_correctly<R: rand::Rng>(session: &mut WordGameSession<R>) {
    let answer = solve(session.pool(), &session.state().scrambled_word)
        .expect("scramble should come from the pool");
    session.update_guess(&answer);
    session.check_guess();
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> EventCollector<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<E> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&E) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl<E: Clone> EventHandler<E> for EventCollector<E> {
    fn handle_event(&mut self, event: &E) {
        self.events.lock().unwrap().push(event.clone());
    }
}
