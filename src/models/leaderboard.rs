use serde::{Deserialize, Serialize};

/// One cohort row as fetched from the backend, before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortMember {
    pub user_id: String,
    pub display_name: String,
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_ref: Option<String>,
}

/// Fixed decoration for the top three ranks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: i64) -> Option<Medal> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "gold",
            Medal::Silver => "silver",
            Medal::Bronze => "bronze",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub points: i64,
    pub rank: i64,
    pub is_self: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_ref: Option<String>,
}

/// Output of ranking one cohort: the capped display list plus the
/// viewer's rank over the uncapped cohort, which may point past the
/// end of `entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLeaderboard {
    pub entries: Vec<LeaderboardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_rank: Option<i64>,
    pub cohort_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub grade: String,
    pub entries: Vec<LeaderboardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_rank: Option<i64>,
    pub cohort_size: usize,
    pub generated_at: String,
}
