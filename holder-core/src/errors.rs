/// Configuration problems detected when a pool or session is built.
///
/// Every runtime operation on a session or ledger is total; these are the
/// only failures the crate reports, and they are raised eagerly so that a
/// bad pool can never stall a draw or a shuffle later on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Word pool is empty")]
    EmptyWordPool,
    #[error("Word '{word}' has no distinct-letter arrangement to scramble")]
    UnscramblableWord { word: String },
    #[error("max_rounds must be at least 1")]
    ZeroMaxRounds,
    #[error("score_increment must be at least 1")]
    ZeroScoreIncrement,
    #[error("max_rounds ({max_rounds}) exceeds the word pool size ({pool_size})")]
    NotEnoughWords { max_rounds: u32, pool_size: usize },
    #[error("Invalid value '{value}' for {name}")]
    InvalidEnvVar { name: String, value: String },
}
