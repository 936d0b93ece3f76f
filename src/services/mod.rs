pub mod leaderboard_service;
pub mod profile_service;
pub mod progress_service;
pub mod stats_engine;
