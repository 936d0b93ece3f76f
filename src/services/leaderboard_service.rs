use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::leaderboard::LeaderboardView;
use crate::repo::ProfileRepository;
use crate::services::stats_engine::{self, LEADERBOARD_LIMIT};

/// Builds the grade-cohort leaderboard for the progress screen.
pub struct LeaderboardService {
    repo: Arc<dyn ProfileRepository>,
}

impl LeaderboardService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn load_leaderboard(&self, user_id: &str) -> AppResult<LeaderboardView> {
        let user = self.repo.fetch_user(user_id).await?;
        let grade = user.grade.ok_or_else(|| {
            AppError::invalid_input(format!(
                "user {} has no grade, cohort is undefined",
                user.id
            ))
        })?;

        let cohort = self.repo.fetch_cohort(&grade).await?;
        debug!(
            target: "app::leaderboard",
            %grade,
            cohort_size = cohort.len(),
            "ranking cohort"
        );

        let ranked = stats_engine::rank_leaderboard(cohort, user_id, LEADERBOARD_LIMIT);

        Ok(LeaderboardView {
            grade,
            entries: ranked.entries,
            self_rank: ranked.self_rank,
            cohort_size: ranked.cohort_size,
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}
