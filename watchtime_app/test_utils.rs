#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use watchtime_types::{errors::ApplicationError, records::WatchtimeRecord};

    use crate::{
        repository::WatchtimeRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default, Clone)]
    pub struct MockWatchtimeRepository {
        records: Arc<Mutex<Vec<WatchtimeRecord>>>,
    }

    impl MockWatchtimeRepository {
        pub fn with_records(records: Vec<WatchtimeRecord>) -> Self {
            Self {
                records: Arc::new(Mutex::new(records)),
            }
        }

        /// Records in insertion order.
        pub fn records(&self) -> Vec<WatchtimeRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WatchtimeRepository for MockWatchtimeRepository {
        async fn list_all(&self) -> Result<Vec<WatchtimeRecord>, ApplicationError> {
            let mut records = self.records.lock().unwrap().clone();
            records.sort_by(|a, b| a.user_id.cmp(&b.user_id));
            Ok(records)
        }

        async fn upsert(&self, record: &WatchtimeRecord) -> Result<(), ApplicationError> {
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.user_id == record.user_id) {
                Some(existing) => existing.total_watchtime = record.total_watchtime,
                None => records.push(record.clone()),
            }
            Ok(())
        }

        async fn delete(&self, user_id: &str) -> Result<(), ApplicationError> {
            self.records.lock().unwrap().retain(|r| r.user_id != user_id);
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        watchtimes: Arc<MockWatchtimeRepository>,

        // Flags to check if commit/rollback was called
        committed: Arc<Mutex<bool>>,
        rolled_back: Arc<Mutex<bool>>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_records(records: Vec<WatchtimeRecord>) -> Self {
            Self {
                watchtimes: Arc::new(MockWatchtimeRepository::with_records(records)),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn watchtimes(&self) -> Arc<dyn WatchtimeRepository + 'a> {
            self.watchtimes.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.committed.lock().unwrap() = true;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.rolled_back.lock().unwrap() = true;
            Ok(())
        }
    }

    /// Hands out clones of one shared [`MockUnitOfWork`], so tests can
    /// inspect what a bus-driven handler left behind.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_records(records: Vec<WatchtimeRecord>) -> Self {
            Self {
                uow: MockUnitOfWork::with_records(records),
            }
        }

        pub fn committed(&self) -> bool {
            *self.uow.committed.lock().unwrap()
        }

        pub fn rolled_back(&self) -> bool {
            *self.uow.rolled_back.lock().unwrap()
        }

        pub fn records(&self) -> Vec<WatchtimeRecord> {
            self.uow.watchtimes.records()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }

    /// Builds the error every failing mock call returns.
    pub type ErrorFactory = fn() -> ApplicationError;

    /// Repository whose every call fails, to exercise error paths.
    #[derive(Clone)]
    pub struct FailingWatchtimeRepository {
        error: ErrorFactory,
    }

    #[async_trait]
    impl WatchtimeRepository for FailingWatchtimeRepository {
        async fn list_all(&self) -> Result<Vec<WatchtimeRecord>, ApplicationError> {
            Err((self.error)())
        }

        async fn upsert(&self, _record: &WatchtimeRecord) -> Result<(), ApplicationError> {
            Err((self.error)())
        }

        async fn delete(&self, _user_id: &str) -> Result<(), ApplicationError> {
            Err((self.error)())
        }
    }

    #[derive(Clone)]
    pub struct FailingUnitOfWork {
        watchtimes: Arc<FailingWatchtimeRepository>,
    }

    impl FailingUnitOfWork {
        pub fn new(error: ErrorFactory) -> Self {
            Self {
                watchtimes: Arc::new(FailingWatchtimeRepository { error }),
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for FailingUnitOfWork {
        fn watchtimes(&self) -> Arc<dyn WatchtimeRepository + 'a> {
            self.watchtimes.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    pub struct FailingUnitOfWorkProvider {
        uow: FailingUnitOfWork,
    }

    impl FailingUnitOfWorkProvider {
        pub fn new(error: ErrorFactory) -> Self {
            Self {
                uow: FailingUnitOfWork::new(error),
            }
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for FailingUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }
}
