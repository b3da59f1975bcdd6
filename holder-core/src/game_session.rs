use std::collections::HashSet;
use std::fmt;

use holder_types::{GamePhase, GameRoundState, SessionId, same_word};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::word_pool::shuffle_word;
use crate::{ConfigError, EventBus, GameConfig, GameEvent, WordPool};

/// One player's unscramble game.
///
/// The target word stays private; observers read the `GameRoundState`
/// snapshot, which is rebuilt whole on every transition. A session is reset
/// as part of construction, so it always has a round loaded.
pub struct WordGameSession<R = ThreadRng> {
    id: SessionId,
    pool: WordPool,
    config: GameConfig,
    rng: R,
    current_word: String, // Hidden from observers
    used_words: HashSet<String>,
    state: GameRoundState,
    user_guess: String,
    pub event_bus: EventBus<GameEvent>,
}

impl WordGameSession<ThreadRng> {
    /// Session over the built-in word list with the default config.
    pub fn with_default_words() -> Self {
        Self::from_parts(WordPool::builtin(), GameConfig::default(), rand::rng())
    }

    /// Session configured from `UNSCRAMBLE_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = GameConfig::from_env()?;
        let pool = WordPool::from_env()?;
        Ok(Self::new(pool, config, rand::rng())?)
    }
}

impl<R: Rng> WordGameSession<R> {
    pub fn new(pool: WordPool, config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.max_rounds as usize > pool.len() {
            return Err(ConfigError::NotEnoughWords {
                max_rounds: config.max_rounds,
                pool_size: pool.len(),
            });
        }

        Ok(Self::from_parts(pool, config, rng))
    }

    fn from_parts(pool: WordPool, config: GameConfig, rng: R) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            pool,
            config,
            rng,
            current_word: String::new(),
            used_words: HashSet::new(),
            state: GameRoundState::first_round(String::new()),
            user_guess: String::new(),
            event_bus: EventBus::new(),
        };

        info!(
            session_id = %session.id,
            pool_size = session.pool.len(),
            max_rounds = session.config.max_rounds,
            "Created word game session"
        );
        session.reset_game();
        session
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn state(&self) -> &GameRoundState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        GamePhase::from(&self.state)
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// Words drawn so far in this game, including the current one.
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Start over at round one with a zero score.
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();

        match self.draw_word() {
            Some(scrambled_word) => {
                self.state = GameRoundState::first_round(scrambled_word.clone());
                info!(session_id = %self.id, "Game started");
                self.event_bus.publish(GameEvent::GameStarted {
                    session_id: self.id,
                    scrambled_word,
                });
            }
            // A validated pool is never empty, so this only guards the invariant.
            None => {
                self.state = GameRoundState::first_round(String::new());
                self.end_game(0);
            }
        }
    }

    /// Store the guess as typed. Typing anything clears a stale wrong-guess flag.
    pub fn update_guess(&mut self, text: &str) {
        self.user_guess = text.to_string();

        if !text.is_empty() {
            self.state = GameRoundState {
                is_guess_wrong: false,
                ..self.state.clone()
            };
        }

        self.event_bus.publish(GameEvent::GuessUpdated {
            session_id: self.id,
        });
    }

    /// Submit the current guess. A match scores and moves on, anything else
    /// flags the guess as wrong. The guess is cleared either way. Once the
    /// round limit is reached a match still scores, but no word is drawn.
    pub fn check_guess(&mut self) {
        if same_word(&self.user_guess, &self.current_word) {
            let updated_score = self.state.score.saturating_add(self.config.score_increment);
            debug!(
                session_id = %self.id,
                round = self.state.word_count,
                score = updated_score,
                "Correct guess"
            );
            self.event_bus.publish(GameEvent::GuessAccepted {
                session_id: self.id,
                score: updated_score,
            });
            self.advance_round(updated_score);
        } else {
            debug!(session_id = %self.id, round = self.state.word_count, "Wrong guess");
            self.state = GameRoundState {
                is_guess_wrong: true,
                ..self.state.clone()
            };
            self.event_bus.publish(GameEvent::GuessRejected {
                session_id: self.id,
                word_count: self.state.word_count,
            });
        }

        self.user_guess.clear();
    }

    /// Move to the next word without scoring.
    pub fn skip_word(&mut self) {
        if self.state.is_game_over {
            debug!(session_id = %self.id, "Ignoring skip after game over");
            self.user_guess.clear();
            return;
        }

        debug!(session_id = %self.id, round = self.state.word_count, "Word skipped");
        self.event_bus.publish(GameEvent::WordSkipped {
            session_id: self.id,
            word_count: self.state.word_count,
        });
        self.advance_round(self.state.score);
        self.user_guess.clear();
    }

    fn advance_round(&mut self, updated_score: u32) {
        if self.used_words.len() >= self.config.max_rounds as usize {
            self.end_game(updated_score);
            return;
        }

        match self.draw_word() {
            Some(scrambled_word) => {
                self.state = GameRoundState {
                    scrambled_word: scrambled_word.clone(),
                    word_count: self.state.word_count + 1,
                    score: updated_score,
                    is_guess_wrong: false,
                    is_game_over: false,
                };
                debug!(session_id = %self.id, round = self.state.word_count, "Round advanced");
                self.event_bus.publish(GameEvent::RoundAdvanced {
                    session_id: self.id,
                    word_count: self.state.word_count,
                    scrambled_word,
                });
            }
            None => self.end_game(updated_score),
        }
    }

    fn end_game(&mut self, final_score: u32) {
        self.state = GameRoundState {
            score: final_score,
            is_guess_wrong: false,
            is_game_over: true,
            ..self.state.clone()
        };

        info!(
            session_id = %self.id,
            score = final_score,
            rounds = self.state.word_count,
            "Game over"
        );
        self.event_bus.publish(GameEvent::GameOver {
            session_id: self.id,
            final_score,
            rounds_played: self.state.word_count,
        });
    }

    /// Pick an unused word, make it the target and return its scramble.
    fn draw_word(&mut self) -> Option<String> {
        let word = self
            .pool
            .draw_unused(&self.used_words, &mut self.rng)?
            .to_string();

        self.used_words.insert(word.clone());
        let scrambled = shuffle_word(&word, &mut self.rng);
        self.current_word = word;

        debug!(
            session_id = %self.id,
            used_words = self.used_words.len(),
            "Drew a new word"
        );
        Some(scrambled)
    }
}

impl<R> fmt::Debug for WordGameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordGameSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("used_words", &self.used_words.len())
            .field("state", &self.state)
            .field("user_guess", &self.user_guess)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_session(words: &[&str], max_rounds: u32) -> WordGameSession<StdRng> {
        let pool = WordPool::new(words).unwrap();
        WordGameSession::new(pool, GameConfig::new(max_rounds, 20), StdRng::seed_from_u64(42))
            .unwrap()
    }

    #[test]
    fn test_new_session_is_reset() {
        let session = create_session(&["cat", "dog", "owl"], 3);
        assert_eq!(session.state().word_count, 1);
        assert_eq!(session.state().score, 0);
        assert!(!session.state().is_game_over);
        assert!(!session.state().is_guess_wrong);
        assert_eq!(session.used_word_count(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(!same_word(&session.state().scrambled_word, &session.current_word));
    }

    #[test]
    fn test_correct_guess_scores_and_advances() {
        let mut session = create_session(&["cat", "dog", "owl"], 3);
        let target = session.current_word.clone();

        session.update_guess(&target.to_uppercase());
        session.check_guess();

        assert_eq!(session.state().score, 20);
        assert_eq!(session.state().word_count, 2);
        assert_eq!(session.user_guess(), "");
        assert_ne!(session.current_word, target);
    }

    #[test]
    fn test_wrong_guess_flags_and_keeps_round() {
        let mut session = create_session(&["cat", "dog", "owl"], 3);
        let before = session.state().clone();

        session.update_guess("nope");
        session.check_guess();

        assert!(session.state().is_guess_wrong);
        assert_eq!(session.state().score, before.score);
        assert_eq!(session.state().word_count, before.word_count);
        assert_eq!(session.state().scrambled_word, before.scrambled_word);
        assert_eq!(session.user_guess(), "");

        // retyping clears the flag, an empty update does not
        session.update_guess("");
        assert!(session.state().is_guess_wrong);
        session.update_guess("c");
        assert!(!session.state().is_guess_wrong);
        assert_eq!(session.user_guess(), "c");
    }

    #[test]
    fn test_guess_stored_verbatim() {
        let mut session = create_session(&["cat", "dog"], 2);
        session.update_guess("  Cat ");
        assert_eq!(session.user_guess(), "  Cat ");
    }

    #[test]
    fn test_game_over_after_max_rounds() {
        let mut session = create_session(&["cat", "dog"], 2);

        session.skip_word();
        assert_eq!(session.state().word_count, 2);
        assert!(!session.state().is_game_over);

        session.skip_word();
        assert!(session.state().is_game_over);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().word_count, 2);
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_no_draws_after_game_over() {
        let mut session = create_session(&["cat", "dog", "owl"], 1);
        let target = session.current_word.clone();
        session.update_guess(&target);
        session.check_guess();

        let final_state = session.state().clone();
        assert!(final_state.is_game_over);
        assert_eq!(final_state.score, 20);

        session.update_guess(&target);
        session.check_guess();
        session.skip_word();

        assert!(session.state().is_game_over);
        assert_eq!(session.state().scrambled_word, final_state.scrambled_word);
        assert_eq!(session.state().word_count, final_state.word_count);
        assert_eq!(session.current_word, target);
        assert_eq!(session.used_word_count(), 1);
    }

    #[test]
    fn test_wrong_guess_after_game_over_is_flagged() {
        let mut session = create_session(&["cat", "dog"], 1);
        session.skip_word();
        assert!(session.state().is_game_over);

        session.update_guess("definitely wrong");
        session.check_guess();

        assert!(session.state().is_guess_wrong);
        assert!(session.state().is_game_over);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.user_guess(), "");
        assert_eq!(session.used_word_count(), 1);
    }

    #[test]
    fn test_correct_guess_after_game_over_scores_without_drawing() {
        let mut session = create_session(&["cat", "dog"], 1);
        let target = session.current_word.clone();
        session.skip_word();
        let scrambled = session.state().scrambled_word.clone();

        session.update_guess(&target);
        session.check_guess();

        assert_eq!(session.state().score, 20);
        assert!(session.state().is_game_over);
        assert!(!session.state().is_guess_wrong);
        assert_eq!(session.state().word_count, 1);
        assert_eq!(session.state().scrambled_word, scrambled);
        assert_eq!(session.current_word, target);
        assert_eq!(session.used_word_count(), 1);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut session = create_session(&["cat", "dog"], 1);
        session.skip_word();
        assert!(session.state().is_game_over);

        session.update_guess("x");
        session.reset_game();
        assert_eq!(session.state().word_count, 1);
        assert!(!session.state().is_game_over);
        assert_eq!(session.used_word_count(), 1);
        assert_eq!(session.user_guess(), "");
    }

    #[test]
    fn test_invalid_configurations() {
        let pool = WordPool::new(["cat", "dog"]).unwrap();
        let rng = StdRng::seed_from_u64(0);
        let err = WordGameSession::new(pool.clone(), GameConfig::new(3, 20), rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotEnoughWords {
                max_rounds: 3,
                pool_size: 2
            }
        );

        let rng = StdRng::seed_from_u64(0);
        let err = WordGameSession::new(pool.clone(), GameConfig::new(0, 20), rng).unwrap_err();
        assert_eq!(err, ConfigError::ZeroMaxRounds);

        let rng = StdRng::seed_from_u64(0);
        let err = WordGameSession::new(pool, GameConfig::new(2, 0), rng).unwrap_err();
        assert_eq!(err, ConfigError::ZeroScoreIncrement);
    }

    #[test]
    fn test_default_session() {
        let session = WordGameSession::with_default_words();
        assert_eq!(session.config(), &GameConfig::default());
        assert!(session.pool().len() >= session.config().max_rounds as usize);
        assert!(session.pool().contains(&session.current_word));
    }

    #[test]
    fn test_debug_hides_target() {
        let session = create_session(&["xylophone", "kangaroo"], 2);
        let rendered = format!("{session:?}");
        assert!(!rendered.contains(&session.current_word));
    }
}
