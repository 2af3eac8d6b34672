use watchtime_types::{errors::ApplicationError, records::WatchtimeRecord};

#[async_trait::async_trait]
pub trait WatchtimeRepository: Send + Sync {
    /// Returns every record, ordered by user id.
    async fn list_all(&self) -> Result<Vec<WatchtimeRecord>, ApplicationError>;

    /// Saves a record (creates if new, replaces the watchtime if it exists).
    async fn upsert(&self, record: &WatchtimeRecord) -> Result<(), ApplicationError>;

    /// Removes the record for `user_id`. Removing a missing user is not an error.
    async fn delete(&self, user_id: &str) -> Result<(), ApplicationError>;
}
