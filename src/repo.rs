use crate::error::AppResult;
use crate::models::activity::ActivityCounts;
use crate::models::leaderboard::CohortMember;
use crate::models::profile::{ProfileFieldsUpdate, Role, UserRecord};

/// Data-access contract for the profile and progress screens,
/// implemented by the embedding shell against the backing document
/// database. The core never talks to the network itself; how counts
/// are aggregated (today a full activity scan, later a server-side
/// aggregate) stays behind this trait.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn fetch_user(&self, user_id: &str) -> AppResult<UserRecord>;

    /// Resolves a profile by email, used for the parent -> child link.
    async fn fetch_user_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// May fail with `Unavailable`; callers degrade to zeroed counts.
    async fn fetch_activity_counts(&self, user_id: &str) -> AppResult<ActivityCounts>;

    /// All users sharing a grade, in backend fetch order. Ties in the
    /// leaderboard keep this order.
    async fn fetch_cohort(&self, grade: &str) -> AppResult<Vec<CohortMember>>;

    /// Last-write-wins role update; callers log failures and move on.
    async fn persist_role_promotion(&self, user_id: &str, role: Role) -> AppResult<()>;

    async fn persist_profile_fields(
        &self,
        user_id: &str,
        fields: &ProfileFieldsUpdate,
    ) -> AppResult<()>;
}
