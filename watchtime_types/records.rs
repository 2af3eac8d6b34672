use serde::{Deserialize, Serialize};

/// Cumulative watchtime reported for a single user.
///
/// The store keeps exactly one record per `user_id`; an upsert replaces
/// `total_watchtime` wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchtimeRecord {
    pub user_id: String,
    pub total_watchtime: i64,
}

impl WatchtimeRecord {
    pub fn new(user_id: impl Into<String>, total_watchtime: i64) -> Self {
        Self {
            user_id: user_id.into(),
            total_watchtime,
        }
    }
}
