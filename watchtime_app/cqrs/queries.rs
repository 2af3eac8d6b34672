use watchtime_types::ranking::RankingResult;

use crate::cqrs::Query;

/// Rank a user against the whole leaderboard, with anonymized neighbors.
#[derive(Debug, Clone)]
pub struct GetRanking {
    pub user_id: String,
}

impl Query for GetRanking {
    type Output = RankingResult;
}
