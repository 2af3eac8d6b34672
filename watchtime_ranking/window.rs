use std::ops::Range;

use watchtime_types::errors::RankingError;

/// How many places above and below the target an interior window reaches.
pub const NEIGHBOR_RADIUS: usize = 2;

/// Smallest leaderboard that gets a fixed-size window instead of everyone.
pub const MIN_WINDOWED_LEADERBOARD: usize = 2 * NEIGHBOR_RADIUS + 1;

/// Upper bound on the neighbors returned for any target.
pub const MAX_NEIGHBORS: usize = MIN_WINDOWED_LEADERBOARD - 1;

/// Which slice of the leaderboard is shown around a target.
///
/// The four variants partition every valid `(len, rank_index)` pair, so a
/// `match` on them is the whole selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborWindow {
    /// Fewer than [`MIN_WINDOWED_LEADERBOARD`] entries: show all of them.
    Small,
    /// At least [`NEIGHBOR_RADIUS`] entries on both sides of the target.
    Interior,
    /// Target within [`NEIGHBOR_RADIUS`] of the last entry: show the tail.
    NearBottom,
    /// Target within [`NEIGHBOR_RADIUS`] of the first entry: show the head.
    NearTop,
}

impl NeighborWindow {
    /// Picks the window for a target at 0-based `rank_index` in a leaderboard
    /// of `len` entries.
    pub fn classify(len: usize, rank_index: usize) -> Result<Self, RankingError> {
        if rank_index >= len {
            return Err(RankingError::InvalidRanking {
                index: rank_index,
                len,
            });
        }

        if len < MIN_WINDOWED_LEADERBOARD {
            return Ok(NeighborWindow::Small);
        }

        let clear_of_top = rank_index >= NEIGHBOR_RADIUS;
        let clear_of_bottom = rank_index + NEIGHBOR_RADIUS < len;

        // The bottom check wins over the top one; with len >= 5 both
        // can't fail together anyway.
        let window = match (clear_of_top, clear_of_bottom) {
            (true, true) => NeighborWindow::Interior,
            (_, false) => NeighborWindow::NearBottom,
            (false, true) => NeighborWindow::NearTop,
        };

        Ok(window)
    }

    /// Half-open index range covered by this window, target included.
    ///
    /// Only meaningful for the `(len, rank_index)` pair [`classify`] was
    /// called with.
    ///
    /// [`classify`]: NeighborWindow::classify
    pub fn range(self, len: usize, rank_index: usize) -> Range<usize> {
        match self {
            NeighborWindow::Small => 0..len,
            NeighborWindow::Interior => {
                rank_index - NEIGHBOR_RADIUS..rank_index + NEIGHBOR_RADIUS + 1
            }
            NeighborWindow::NearBottom => len - MIN_WINDOWED_LEADERBOARD..len,
            NeighborWindow::NearTop => 0..MIN_WINDOWED_LEADERBOARD,
        }
    }
}
