use thiserror::Error;

pub mod app_error;
pub mod ranking_error;
pub mod store_error;

pub use app_error::AppError;
pub use ranking_error::RankingError;
pub use store_error::StoreError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

