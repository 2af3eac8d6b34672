mod get_ranking;

pub use get_ranking::GetRankingHandler;
