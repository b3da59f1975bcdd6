use std::collections::HashSet;
use std::env::{self, VarError};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use holder_types::same_word;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, warn};

use crate::ConfigError;
use crate::words::DEFAULT_WORDS;

pub const WORDS_FILE_VAR: &str = "UNSCRAMBLE_WORDS_FILE";

/// Random permutations tried before falling back to a deterministic swap.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 32;

/// The fixed set of candidate words a game draws from.
///
/// A pool is never empty and every word in it can be scrambled into
/// something visibly different, so drawing and shuffling always finish.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from individual words. Words are trimmed, blanks are
    /// skipped and case-insensitive duplicates keep their first spelling.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !seen.insert(word.to_lowercase()) {
                continue;
            }
            if !is_scramblable(word) {
                return Err(ConfigError::UnscramblableWord {
                    word: word.to_string(),
                });
            }
            pool.push(word.to_string());
        }

        if pool.is_empty() {
            return Err(ConfigError::EmptyWordPool);
        }

        Ok(Self { words: pool })
    }

    /// Parse a newline separated list. Lines starting with `#` are comments.
    pub fn from_word_list(word_list: &str) -> Result<Self, ConfigError> {
        Self::new(
            word_list
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let pool = Self::from_word_list(&contents)
            .with_context(|| format!("Invalid word list {}", path.display()))?;
        debug!(words = pool.len(), path = %path.display(), "Loaded word pool");
        Ok(pool)
    }

    /// The file named by `UNSCRAMBLE_WORDS_FILE`, or the built-in list.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(env::var(WORDS_FILE_VAR))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(path) => Self::from_file(path),
            Err(VarError::NotPresent) => Ok(Self::builtin()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnvVar {
                name: WORDS_FILE_VAR.to_string(),
                value: raw.to_string_lossy().into_owned(),
            }
            .into()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| same_word(candidate, word))
    }

    /// Pick uniformly among the words not in `used`.
    pub(crate) fn draw_unused<R: Rng + ?Sized>(
        &self,
        used: &HashSet<String>,
        rng: &mut R,
    ) -> Option<&str> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| !used.contains(*word))
            .collect();
        candidates.choose(rng).map(|word| word.as_str())
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Whether some arrangement of the letters differs from the word ignoring
/// case, i.e. it has at least two distinct letters.
pub fn is_scramblable(word: &str) -> bool {
    let mut letters = word.chars();
    match letters.next() {
        Some(first) => letters.any(|letter| !same_letter(letter, first)),
        None => false,
    }
}

/// Permute the letters of `word` so the result differs from it ignoring
/// case. Gives up on random attempts after `MAX_SHUFFLE_ATTEMPTS` and swaps
/// the first letter with the first one unlike it.
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if !same_word(&candidate, word) {
            return candidate;
        }
    }

    warn!(
        attempts = MAX_SHUFFLE_ATTEMPTS,
        "Random shuffle kept matching the word, falling back to a letter swap"
    );

    let mut letters: Vec<char> = word.chars().collect();
    if let Some(&first) = letters.first() {
        if let Some(index) = letters.iter().position(|&letter| !same_letter(letter, first)) {
            letters.swap(0, index);
        }
    }
    letters.into_iter().collect()
}
