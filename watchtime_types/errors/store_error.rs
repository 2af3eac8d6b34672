use thiserror::Error;

/// Errors for the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed record: {0}")]
    InvalidSeed(String),
}
