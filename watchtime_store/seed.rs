use std::{collections::HashSet, path::Path};

use watchtime_types::{
    errors::{ApplicationError, StoreError},
    records::WatchtimeRecord,
};

use crate::store::WatchtimeStore;

/// Loads a JSON array of records into an empty store.
///
/// Returns `Ok(false)` without reading the file when the store already holds
/// records. The whole file is validated before anything is written.
pub async fn bootstrap_from_file(
    store: &WatchtimeStore,
    path: &Path,
) -> Result<bool, ApplicationError> {
    if !store.is_empty().await {
        return Ok(false);
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::SeedIo {
            path: path.display().to_string(),
            source,
        })?;
    let records: Vec<WatchtimeRecord> = serde_json::from_str(&raw)?;
    validate_seed(&records)?;

    tracing::info!("Seeding store with {} records from {}", records.len(), path.display());

    let mut table = store.table().write().await;
    for record in records {
        table.insert(record.user_id, record.total_watchtime);
    }

    Ok(true)
}

fn validate_seed(records: &[WatchtimeRecord]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if record.user_id.trim().is_empty() {
            return Err(StoreError::InvalidSeed("empty userId".to_string()));
        }
        if record.total_watchtime < 0 {
            return Err(StoreError::InvalidSeed(format!(
                "negative totalWatchtime for user {}",
                record.user_id
            )));
        }
        if !seen.insert(record.user_id.as_str()) {
            return Err(StoreError::InvalidSeed(format!(
                "duplicate userId {}",
                record.user_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use watchtime_types::errors::{ApplicationError, StoreError};

    use super::*;

    async fn write_seed(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("watchtime-seed-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_bootstrap_loads_records_into_empty_store() -> Result<(), ApplicationError> {
        let store = WatchtimeStore::new();
        let path = write_seed(
            r#"[{"userId":"bob","totalWatchtime":20},{"userId":"alice","totalWatchtime":30}]"#,
        )
        .await;

        assert!(bootstrap_from_file(&store, &path).await?);
        assert_eq!(
            store.snapshot().await,
            vec![
                WatchtimeRecord::new("alice", 30),
                WatchtimeRecord::new("bob", 20)
            ]
        );

        tokio::fs::remove_file(path).await.ok();
        Ok(())
    }

    #[tokio::test]
    async fn test_bootstrap_skips_non_empty_store() -> Result<(), ApplicationError> {
        let store = WatchtimeStore::new();
        let path = write_seed(r#"[{"userId":"alice","totalWatchtime":30}]"#).await;
        bootstrap_from_file(&store, &path).await?;

        let other = write_seed(r#"[{"userId":"mallory","totalWatchtime":99}]"#).await;
        assert!(!bootstrap_from_file(&store, &other).await?);
        assert_eq!(store.len().await, 1);

        tokio::fs::remove_file(path).await.ok();
        tokio::fs::remove_file(other).await.ok();
        Ok(())
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_duplicates_without_writing() {
        let store = WatchtimeStore::new();
        let path = write_seed(
            r#"[{"userId":"alice","totalWatchtime":30},{"userId":"alice","totalWatchtime":1}]"#,
        )
        .await;

        let result = bootstrap_from_file(&store, &path).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::InvalidSeed(_)))
        ));
        assert!(store.is_empty().await);
        tokio::fs::remove_file(path).await.ok();
    }

    #[tokio::test]
    async fn test_bootstrap_missing_file() {
        let store = WatchtimeStore::new();
        let path = std::env::temp_dir().join("watchtime-seed-does-not-exist.json");

        let result = bootstrap_from_file(&store, &path).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::SeedIo { .. }))
        ));
    }
}
