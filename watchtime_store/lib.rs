//! In-memory record store behind the `watchtime_app` repository traits.

pub mod uow;

mod repository;
mod seed;
mod store;

pub use repository::*;
pub use seed::bootstrap_from_file;
pub use store::WatchtimeStore;
