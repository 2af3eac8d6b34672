use crate::cqrs::Command;

/// Creates the user's record or replaces its total watchtime.
#[derive(Debug, Clone)]
pub struct UpsertWatchtime {
    pub user_id: String,
    pub total_watchtime: i64,
}

impl Command for UpsertWatchtime {}

#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: String,
}

impl Command for DeleteUser {}
