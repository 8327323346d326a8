pub mod match_id;

pub use match_id::MatchId;
