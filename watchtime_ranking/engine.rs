use watchtime_types::{
    errors::RankingError,
    ranking::{AnonRankingEntry, RankingResult},
    records::WatchtimeRecord,
};

use crate::window::NeighborWindow;

/// Sorts `records` by watchtime, highest first, and finds `user_id` in them.
///
/// The sort is stable: records with equal watchtime keep the order they came
/// in. Returns the 0-based index of the user together with the sorted
/// leaderboard, so the caller can reuse it for neighbor selection.
pub fn compute_rank(
    records: Vec<WatchtimeRecord>,
    user_id: &str,
) -> Result<(usize, Vec<WatchtimeRecord>), RankingError> {
    let mut leaderboard = records;
    leaderboard.sort_by(|a, b| b.total_watchtime.cmp(&a.total_watchtime));

    let rank_index = leaderboard
        .iter()
        .position(|record| record.user_id == user_id)
        .ok_or_else(|| RankingError::UserNotFound(user_id.to_string()))?;

    Ok((rank_index, leaderboard))
}

/// Returns the anonymized entries shown around the user at `rank_index`.
///
/// `leaderboard` must already be sorted (see [`compute_rank`]). The target
/// itself is never part of the result and at most
/// [`MAX_NEIGHBORS`](crate::MAX_NEIGHBORS) entries come back, in leaderboard
/// order.
pub fn select_closest_neighbors(
    leaderboard: &[WatchtimeRecord],
    rank_index: usize,
) -> Result<Vec<AnonRankingEntry>, RankingError> {
    let window = NeighborWindow::classify(leaderboard.len(), rank_index)?;

    let neighbors = window
        .range(leaderboard.len(), rank_index)
        .filter(|&index| index != rank_index)
        .map(|index| AnonRankingEntry {
            position: position_of(index),
            total_watchtime: leaderboard[index].total_watchtime,
        })
        .collect();

    Ok(neighbors)
}

/// Ranks `user_id` against a full snapshot of records.
pub fn rank_user(
    records: Vec<WatchtimeRecord>,
    user_id: &str,
) -> Result<RankingResult, RankingError> {
    let (rank_index, leaderboard) = compute_rank(records, user_id)?;
    tracing::debug!(
        "User {user_id} ranked {} of {}",
        position_of(rank_index),
        leaderboard.len()
    );

    let closest_neighbors = select_closest_neighbors(&leaderboard, rank_index)?;

    Ok(RankingResult {
        position: position_of(rank_index),
        total_watchtime: leaderboard[rank_index].total_watchtime,
        closest_neighbors,
    })
}

fn position_of(index: usize) -> i64 {
    index as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MAX_NEIGHBORS,
        test_utils::{RecordFactoryOptions, leaderboard_factory, record_factory},
    };

    fn positions(entries: &[AnonRankingEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.position).collect()
    }

    #[test]
    fn test_compute_rank_sorts_descending() {
        let records = vec![
            WatchtimeRecord::new("low", 10),
            WatchtimeRecord::new("high", 300),
            WatchtimeRecord::new("mid", 120),
        ];

        let (index, sorted) = compute_rank(records, "mid").unwrap();

        assert_eq!(index, 1);
        let ids: Vec<&str> = sorted.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_compute_rank_keeps_input_order_on_ties() {
        let records = vec![
            WatchtimeRecord::new("first", 50),
            WatchtimeRecord::new("top", 80),
            WatchtimeRecord::new("second", 50),
            WatchtimeRecord::new("third", 50),
        ];

        let (index, sorted) = compute_rank(records, "third").unwrap();

        assert_eq!(index, 3);
        let ids: Vec<&str> = sorted.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_compute_rank_unknown_user() {
        let records = leaderboard_factory(&[100, 90, 80]);

        let result = compute_rank(records, "nobody");

        assert_eq!(
            result.unwrap_err(),
            RankingError::UserNotFound("nobody".to_string())
        );
    }

    #[test]
    fn test_compute_rank_empty_leaderboard() {
        let result = compute_rank(vec![], "anyone");

        assert_eq!(
            result.unwrap_err(),
            RankingError::UserNotFound("anyone".to_string())
        );
    }

    #[test]
    fn test_rank_user_small_leaderboard() {
        let records = vec![
            WatchtimeRecord::new("a", 100),
            WatchtimeRecord::new("b", 90),
            WatchtimeRecord::new("c", 80),
        ];

        let result = rank_user(records, "b").unwrap();

        assert_eq!(result.position, 2);
        assert_eq!(result.total_watchtime, 90);
        assert_eq!(
            result.closest_neighbors,
            vec![
                AnonRankingEntry {
                    position: 1,
                    total_watchtime: 100
                },
                AnonRankingEntry {
                    position: 3,
                    total_watchtime: 80
                },
            ]
        );
    }

    #[test]
    fn test_rank_user_alone_on_leaderboard() {
        let records = vec![WatchtimeRecord::new("solo", 42)];

        let result = rank_user(records, "solo").unwrap();

        assert_eq!(result.position, 1);
        assert_eq!(result.total_watchtime, 42);
        assert!(result.closest_neighbors.is_empty());
    }

    #[test]
    fn test_neighbors_interior() {
        let leaderboard = leaderboard_factory(&[100, 90, 80, 70, 60, 50]);

        let neighbors = select_closest_neighbors(&leaderboard, 3).unwrap();

        assert_eq!(positions(&neighbors), vec![2, 3, 5, 6]);
        let watchtimes: Vec<i64> = neighbors.iter().map(|e| e.total_watchtime).collect();
        assert_eq!(watchtimes, vec![90, 80, 60, 50]);
    }

    #[test]
    fn test_neighbors_near_top() {
        let leaderboard = leaderboard_factory(&[100, 90, 80, 70, 60, 50]);

        let neighbors = select_closest_neighbors(&leaderboard, 0).unwrap();
        assert_eq!(positions(&neighbors), vec![2, 3, 4, 5]);

        let neighbors = select_closest_neighbors(&leaderboard, 1).unwrap();
        assert_eq!(positions(&neighbors), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_neighbors_near_bottom() {
        let leaderboard = leaderboard_factory(&[100, 90, 80, 70, 60, 50]);

        let neighbors = select_closest_neighbors(&leaderboard, 5).unwrap();
        assert_eq!(positions(&neighbors), vec![2, 3, 4, 5]);

        let neighbors = select_closest_neighbors(&leaderboard, 4).unwrap();
        assert_eq!(positions(&neighbors), vec![2, 3, 4, 6]);
    }

    #[test]
    fn test_neighbors_near_bottom_in_long_leaderboard() {
        let watchtimes: Vec<i64> = (0..20).rev().map(|w| w * 10).collect();
        let leaderboard = leaderboard_factory(&watchtimes);

        let neighbors = select_closest_neighbors(&leaderboard, 19).unwrap();

        assert_eq!(positions(&neighbors), vec![16, 17, 18, 19]);
    }

    #[test]
    fn test_neighbors_invalid_index() {
        let leaderboard = leaderboard_factory(&[100, 90, 80, 70, 60, 50]);

        let result = select_closest_neighbors(&leaderboard, 6);

        assert_eq!(
            result.unwrap_err(),
            RankingError::InvalidRanking { index: 6, len: 6 }
        );
    }

    #[test]
    fn test_neighbors_invariants_hold_for_every_target() {
        for len in 1..12 {
            let records: Vec<WatchtimeRecord> = (0..len)
                .map(|_| record_factory(RecordFactoryOptions::default()))
                .collect();

            for target in records.iter().map(|r| r.user_id.clone()) {
                let (index, leaderboard) = compute_rank(records.clone(), &target).unwrap();
                assert_eq!(leaderboard[index].user_id, target);

                let neighbors = select_closest_neighbors(&leaderboard, index).unwrap();
                assert!(neighbors.len() <= MAX_NEIGHBORS);
                assert_eq!(neighbors.len(), (len - 1).min(MAX_NEIGHBORS));

                for entry in &neighbors {
                    assert_ne!(entry.position, index as i64 + 1);
                    let entry_index = (entry.position - 1) as usize;
                    assert_eq!(
                        entry.total_watchtime,
                        leaderboard[entry_index].total_watchtime
                    );
                }

                assert!(neighbors.windows(2).all(|w| w[0].position < w[1].position));

                let again = select_closest_neighbors(&leaderboard, index).unwrap();
                assert_eq!(neighbors, again);
            }
        }
    }
}
