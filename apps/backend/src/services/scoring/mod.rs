pub mod orchestration;
pub mod stats;

pub use orchestration::ScoringService;
