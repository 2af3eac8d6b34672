//! Leaderboard ranking: locate a user in the watchtime leaderboard and pick
//! the anonymized entries shown around them.
//!
//! Everything here is a pure function of an in-memory snapshot. Fetching the
//! snapshot is the caller's job.

pub mod engine;
pub mod window;

pub use engine::{compute_rank, rank_user, select_closest_neighbors};
pub use window::{MAX_NEIGHBORS, MIN_WINDOWED_LEADERBOARD, NEIGHBOR_RADIUS, NeighborWindow};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
