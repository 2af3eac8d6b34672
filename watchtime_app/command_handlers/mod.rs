mod delete_user;
mod upsert_watchtime;

pub use delete_user::DeleteUserCommandHandler;
pub use upsert_watchtime::UpsertWatchtimeCommandHandler;
