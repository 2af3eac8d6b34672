use async_trait::async_trait;
use std::sync::Arc;

use watchtime_ranking::rank_user;
use watchtime_types::errors::{ApplicationError, RankingError};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetRanking},
    uow::UnitOfWork,
};

pub struct GetRankingHandler {}

impl GetRankingHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetRanking> for GetRankingHandler {
    async fn handle(
        &self,
        query: GetRanking,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetRanking as Query>::Output, ApplicationError> {
        let ranking = match uow.watchtimes().list_all().await {
            Ok(records) => {
                tracing::info!("Found {} entries.", records.len());
                rank_user(records, &query.user_id).map_err(ApplicationError::from)
            }
            Err(e) => Err(e),
        };

        match ranking {
            Ok(ranking) => {
                tracing::info!(
                    "User rank: {} for user {}.",
                    ranking.position,
                    query.user_id
                );
                Ok(ranking)
            }
            Err(ApplicationError::Ranking(RankingError::UserNotFound(user_id))) => {
                tracing::warn!("User with id {user_id} not found.");
                Err(RankingError::UserNotFound(user_id).into())
            }
            Err(e) => {
                tracing::error!("Unable to rank user {}: {e}", query.user_id);
                Err(e)
            }
        }
    }
}
