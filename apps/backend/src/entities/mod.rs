pub mod deliveries;
pub mod match_player_stats;
pub mod match_states;

pub use deliveries::Entity as Deliveries;
pub use deliveries::Model as DeliveryRow;
pub use match_player_stats::Entity as MatchPlayerStats;
pub use match_player_stats::Model as MatchPlayerStat;
pub use match_states::Entity as MatchStates;
pub use match_states::Model as MatchStateRow;
