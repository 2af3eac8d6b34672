use thiserror::Error;

/// Errors for leaderboard ranking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("User with ID '{0}' not found")]
    UserNotFound(String),

    /// The requested index does not point into the leaderboard.
    #[error("Invalid ranking: index {index} in a leaderboard of {len} entries")]
    InvalidRanking { index: usize, len: usize },
}
