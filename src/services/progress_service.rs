use std::sync::Arc;

use chrono::Utc;
use tracing::{error, warn};

use crate::error::AppResult;
use crate::models::activity::ActivityCounts;
use crate::models::profile::{Role, UserRecord};
use crate::models::progress::{
    ChildSummary, ParentProgress, ProgressOverview, StudentProgress, TeacherProgress,
};
use crate::repo::ProfileRepository;
use crate::services::stats_engine;

/// Assembles the role-conditional payload for the progress screen. All
/// derived stats are recomputed on every call from the latest stored
/// points and activity records; nothing is cached.
pub struct ProgressService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProgressService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn load_overview(&self, user_id: &str) -> AppResult<ProgressOverview> {
        let user = self.repo.fetch_user(user_id).await?;

        match user.role {
            Role::Student | Role::Tutor => self.build_learner_overview(user).await,
            Role::Teacher => self.build_teacher_overview(user).await,
            Role::Parent => self.build_parent_overview(user).await,
        }
    }

    async fn build_learner_overview(&self, user: UserRecord) -> AppResult<ProgressOverview> {
        let role = user.role;
        let counts = self.load_counts_or_zero(&user.id).await?;

        let score = stats_engine::compute_score(&counts)?;
        // Level and badge point-gates read the stored aggregate, which
        // may lag the freshly computed score until the next activity
        // write lands.
        let level = stats_engine::compute_level(user.points)?;
        let badges = stats_engine::compute_badges(&counts, user.points, level.level)?;

        let tutor_eligible = stats_engine::should_promote_to_tutor(user.points, role);
        if tutor_eligible {
            self.promote_to_tutor(&user.id).await;
        }

        let progress = StudentProgress {
            user_id: user.id,
            display_name: user.display_name,
            grade: user.grade,
            counts,
            score,
            points: user.points,
            level,
            badges,
            tutor_eligible,
            generated_at: Utc::now().to_rfc3339(),
        };

        Ok(match role {
            Role::Tutor => ProgressOverview::Tutor(progress),
            _ => ProgressOverview::Student(progress),
        })
    }

    async fn build_teacher_overview(&self, user: UserRecord) -> AppResult<ProgressOverview> {
        let counts = self.load_counts_or_zero(&user.id).await?;

        Ok(ProgressOverview::Teacher(TeacherProgress {
            user_id: user.id,
            display_name: user.display_name,
            counts,
            generated_at: Utc::now().to_rfc3339(),
        }))
    }

    async fn build_parent_overview(&self, user: UserRecord) -> AppResult<ProgressOverview> {
        let child = match user.child_email.as_deref() {
            Some(email) => self.load_child_summary(email).await?,
            None => None,
        };

        Ok(ProgressOverview::Parent(ParentProgress {
            user_id: user.id,
            display_name: user.display_name,
            child,
            generated_at: Utc::now().to_rfc3339(),
        }))
    }

    /// Child resolution is best effort: an unknown email or an
    /// unavailable lookup leaves the summary empty instead of failing
    /// the whole screen.
    async fn load_child_summary(&self, email: &str) -> AppResult<Option<ChildSummary>> {
        let child = match self.repo.fetch_user_by_email(email).await {
            Ok(found) => found,
            Err(err) if err.is_unavailable() => {
                warn!(
                    target: "app::progress",
                    error = %err,
                    "child lookup unavailable, omitting child stats"
                );
                None
            }
            Err(err) => return Err(err),
        };

        match child {
            Some(child) => {
                let level = stats_engine::compute_level(child.points)?;
                Ok(Some(ChildSummary {
                    user_id: child.id,
                    display_name: child.display_name,
                    grade: child.grade,
                    points: child.points,
                    level,
                }))
            }
            None => Ok(None),
        }
    }

    async fn load_counts_or_zero(&self, user_id: &str) -> AppResult<ActivityCounts> {
        match self.repo.fetch_activity_counts(user_id).await {
            Ok(counts) => Ok(counts),
            Err(err) if err.is_unavailable() => {
                warn!(
                    target: "app::progress",
                    %user_id,
                    error = %err,
                    "activity counts unavailable, falling back to zeroed stats"
                );
                Ok(ActivityCounts::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Fire-and-forget in the error sense: a failed write is logged and
    /// the overview still renders. The next refresh re-evaluates
    /// eligibility, and once the stored role is tutor the predicate
    /// stops firing.
    async fn promote_to_tutor(&self, user_id: &str) {
        if let Err(err) = self.repo.persist_role_promotion(user_id, Role::Tutor).await {
            error!(
                target: "app::progress",
                %user_id,
                error = %err,
                "failed to persist tutor promotion"
            );
        }
    }
}
