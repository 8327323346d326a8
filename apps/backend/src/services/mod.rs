pub mod match_locks;
pub mod scoring;
