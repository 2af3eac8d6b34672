use std::sync::Arc;

use watchtime_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// Central entry point for all application logic; holds no business logic.
/// 1. Manages Unit of Work (transaction) lifecycles.
/// 2. Dispatches Commands and Queries to their handlers.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    /// Executes a command.
    /// Commits the Unit of Work when the handler succeeds, rolls it back otherwise.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(_) => {
                uow.commit().await?;
                Ok(())
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Executes a query.
    /// Queries never write, so the Unit of Work is *always* rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;

        let result = handler.handle(query, &uow, &self.config).await;

        uow.rollback().await?;

        result
    }
}
