use rand::Rng;

use watchtime_types::records::WatchtimeRecord;

#[derive(Default, Clone)]
pub struct RecordFactoryOptions<'a> {
    pub user_id: Option<&'a str>,
    pub total_watchtime: Option<i64>,
}

pub fn record_factory(options: RecordFactoryOptions) -> WatchtimeRecord {
    let mut rng = rand::thread_rng();
    let default_user_id = format!("user_{}", rng.r#gen::<u32>());

    WatchtimeRecord {
        user_id: options
            .user_id
            .map_or(default_user_id, |s| s.to_string()),
        total_watchtime: options
            .total_watchtime
            .unwrap_or_else(|| rng.gen_range(0..10_000)),
    }
}

/// Builds records named `user_0`, `user_1`, ... with the given watchtimes,
/// in the given order.
pub fn leaderboard_factory(watchtimes: &[i64]) -> Vec<WatchtimeRecord> {
    watchtimes
        .iter()
        .enumerate()
        .map(|(i, &total_watchtime)| WatchtimeRecord {
            user_id: format!("user_{i}"),
            total_watchtime,
        })
        .collect()
}
