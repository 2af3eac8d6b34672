use std::sync::Arc;

use watchtime_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteUser},
    uow::UnitOfWork,
};

pub struct DeleteUserCommandHandler {}

impl Default for DeleteUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteUser> for DeleteUserCommandHandler {
    async fn handle(
        &self,
        command: DeleteUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        uow.watchtimes().delete(&command.user_id).await?;
        tracing::info!("Deleted watchtime record for user {}", command.user_id);

        Ok(())
    }
}
