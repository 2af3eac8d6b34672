mod helpers;
mod openapi;
mod ranking_handler;
mod user_handler;

pub(crate) use helpers::*;
pub use openapi::{ApiDoc, openapi_json};
pub use ranking_handler::get_ranking;
pub use user_handler::{UpsertUserRequest, delete_user, put_user};
