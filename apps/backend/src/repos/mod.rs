//! Repository functions: free async fns over `ConnectionTrait`, so they
//! run against a connection or the pipeline's transaction alike.

pub mod deliveries;
pub mod match_player_stats;
pub mod match_states;
