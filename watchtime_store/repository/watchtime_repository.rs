use std::sync::Arc;
use tokio::sync::Mutex;

use watchtime_app::repository::WatchtimeRepository;
use watchtime_types::{errors::ApplicationError, records::WatchtimeRecord};

use crate::{store::WatchtimeStore, uow::PendingWrites};

/// Implements WatchtimeRepository on top of a unit of work's pending writes.
#[derive(Clone)]
pub struct InMemoryWatchtimeRepository {
    store: WatchtimeStore,
    pending: Arc<Mutex<PendingWrites>>,
}

impl InMemoryWatchtimeRepository {
    pub(crate) fn new(store: WatchtimeStore, pending: Arc<Mutex<PendingWrites>>) -> Self {
        Self { store, pending }
    }
}

#[async_trait::async_trait]
impl WatchtimeRepository for InMemoryWatchtimeRepository {
    async fn list_all(&self) -> Result<Vec<WatchtimeRecord>, ApplicationError> {
        let pending = self.pending.lock().await;
        let mut table = self.store.table().read().await.clone();

        for (user_id, write) in pending.iter() {
            match write {
                Some(total_watchtime) => {
                    table.insert(user_id.clone(), *total_watchtime);
                }
                None => {
                    table.remove(user_id);
                }
            }
        }

        Ok(table
            .into_iter()
            .map(|(user_id, total_watchtime)| WatchtimeRecord {
                user_id,
                total_watchtime,
            })
            .collect())
    }

    async fn upsert(&self, record: &WatchtimeRecord) -> Result<(), ApplicationError> {
        self.pending
            .lock()
            .await
            .insert(record.user_id.clone(), Some(record.total_watchtime));
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<(), ApplicationError> {
        self.pending.lock().await.insert(user_id.to_string(), None);
        Ok(())
    }
}
