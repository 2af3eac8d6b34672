use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

use watchtime_types::records::WatchtimeRecord;

/// Committed watchtime per user id.
///
/// Keyed by user id, so iteration (and therefore `list_all`) is always in
/// ascending id order.
pub(crate) type Table = BTreeMap<String, i64>;

/// Shared handle to the committed records. Cloning is cheap and every clone
/// sees the same table.
#[derive(Debug, Clone, Default)]
pub struct WatchtimeStore {
    table: Arc<RwLock<Table>>,
}

impl WatchtimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }

    /// Committed records, ordered by user id.
    pub async fn snapshot(&self) -> Vec<WatchtimeRecord> {
        self.table
            .read()
            .await
            .iter()
            .map(|(user_id, total)| WatchtimeRecord::new(user_id.clone(), *total))
            .collect()
    }

    pub(crate) fn table(&self) -> &Arc<RwLock<Table>> {
        &self.table
    }
}
