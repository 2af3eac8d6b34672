use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A leaderboard entry stripped of the user id, so that looking up your own
/// rank never reveals who sits next to you.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnonRankingEntry {
    /// 1-based position in the descending leaderboard.
    pub position: i64,
    pub total_watchtime: i64,
}

/// Outcome of a rank lookup for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    /// 1-based position in the descending leaderboard.
    pub position: i64,
    pub total_watchtime: i64,
    pub closest_neighbors: Vec<AnonRankingEntry>,
}
