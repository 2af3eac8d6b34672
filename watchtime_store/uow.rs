use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

use watchtime_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use watchtime_types::errors::ApplicationError;

use crate::{repository::*, store::WatchtimeStore};

/// Writes staged by a unit of work: `Some` upserts, `None` deletes.
pub(crate) type PendingWrites = BTreeMap<String, Option<i64>>;

#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWorkProvider {
    store: WatchtimeStore,
}

impl InMemoryUnitOfWorkProvider {
    pub fn new(store: WatchtimeStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        Ok(Box::new(InMemoryUnitOfWork::new(self.store.clone())))
    }
}

/// Buffers writes until commit; nothing reaches the store before that.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    store: WatchtimeStore,
    pending: Arc<Mutex<PendingWrites>>,
}

impl InMemoryUnitOfWork {
    pub fn new(store: WatchtimeStore) -> Self {
        Self {
            store,
            pending: Arc::new(Mutex::new(PendingWrites::new())),
        }
    }
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
    fn watchtimes(&self) -> Arc<dyn WatchtimeRepository + 'a> {
        Arc::new(InMemoryWatchtimeRepository::new(
            self.store.clone(),
            self.pending.clone(),
        ))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let pending = std::mem::take(&mut *self.pending.lock().await);
        if pending.is_empty() {
            return Ok(());
        }

        let mut table = self.store.table().write().await;
        for (user_id, write) in pending {
            match write {
                Some(total_watchtime) => {
                    table.insert(user_id, total_watchtime);
                }
                None => {
                    table.remove(&user_id);
                }
            }
        }

        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        self.pending.lock().await.clear();
        Ok(())
    }
}
