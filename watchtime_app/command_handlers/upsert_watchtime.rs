use std::sync::Arc;

use watchtime_types::{Result, errors::AppError, records::WatchtimeRecord};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpsertWatchtime},
    uow::UnitOfWork,
};

pub struct UpsertWatchtimeCommandHandler {}

impl Default for UpsertWatchtimeCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpsertWatchtimeCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpsertWatchtime> for UpsertWatchtimeCommandHandler {
    async fn handle(
        &self,
        command: UpsertWatchtime,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        if command.user_id.trim().is_empty() {
            return Err(AppError::InvalidRequest("userId must not be empty".to_string()).into());
        }

        if command.total_watchtime < 0 {
            return Err(AppError::InvalidRequest(format!(
                "totalWatchtime must not be negative, got {}",
                command.total_watchtime
            ))
            .into());
        }

        let record = WatchtimeRecord::new(command.user_id, command.total_watchtime);
        uow.watchtimes().upsert(&record).await?;

        tracing::info!(
            "Watchtime for user {} set to {}",
            record.user_id,
            record.total_watchtime
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use watchtime_types::{
        Result,
        errors::{AppError, ApplicationError},
        records::WatchtimeRecord,
    };

    use super::*;
    use crate::{
        config::Config, cqrs::commands::UpsertWatchtime, test_utils::tests::MockUnitOfWork,
        uow::UnitOfWork,
    };

    #[tokio::test]
    async fn test_upsert_watchtime_creates_record() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());
        let handler = UpsertWatchtimeCommandHandler::new();

        let command = UpsertWatchtime {
            user_id: "alice".to_string(),
            total_watchtime: 3600,
        };
        handler.handle(command, &mock_uow, &config).await?;

        let records = mock_uow.watchtimes().list_all().await?;
        assert_eq!(records, vec![WatchtimeRecord::new("alice", 3600)]);

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_watchtime_replaces_existing_total() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::with_records(
            vec![
                WatchtimeRecord::new("alice", 3600),
                WatchtimeRecord::new("bob", 10),
            ],
        ));
        let config = Arc::new(Config::default());
        let handler = UpsertWatchtimeCommandHandler::new();

        let command = UpsertWatchtime {
            user_id: "alice".to_string(),
            total_watchtime: 5,
        };
        handler.handle(command, &mock_uow, &config).await?;

        let records = mock_uow.watchtimes().list_all().await?;
        assert_eq!(
            records,
            vec![
                WatchtimeRecord::new("alice", 5),
                WatchtimeRecord::new("bob", 10)
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_watchtime_rejects_invalid_input() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::default());
        let handler = UpsertWatchtimeCommandHandler::new();

        let empty_id = UpsertWatchtime {
            user_id: "  ".to_string(),
            total_watchtime: 1,
        };
        let result = handler.handle(empty_id, &mock_uow, &config).await;
        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::InvalidRequest(_)))
        ));

        let negative = UpsertWatchtime {
            user_id: "carol".to_string(),
            total_watchtime: -1,
        };
        let result = handler.handle(negative, &mock_uow, &config).await;
        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::InvalidRequest(_)))
        ));

        assert!(mock_uow.watchtimes().list_all().await?.is_empty());
        Ok(())
    }
}
