use serde::{Deserialize, Serialize};

use crate::models::activity::{ActivityCounts, ScoreBreakdown};

/// Position within the level ladder derived from stored points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LevelState {
    pub level: i64,
    pub current_level_progress: i64,
    pub next_level_threshold: i64,
}

/// Achievement labels in display order. Badges are recomputed on every
/// refresh; there is no persisted badge history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    FirstQuestion,
    HelpfulAnswer,
    TopContributor,
    CuriousMind,
    PeerClub,
    PeerTutor,
    LevelMaster,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::FirstQuestion => "First Question",
            Badge::HelpfulAnswer => "Helpful Answer",
            Badge::TopContributor => "Top Contributor",
            Badge::CuriousMind => "Curious Mind",
            Badge::PeerClub => "Peer Club",
            Badge::PeerTutor => "Peer Tutor",
            Badge::LevelMaster => "Level Master",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub counts: ActivityCounts,
    pub score: ScoreBreakdown,
    pub points: i64,
    pub level: LevelState,
    pub badges: Vec<Badge>,
    pub tutor_eligible: bool,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProgress {
    pub user_id: String,
    pub display_name: String,
    pub counts: ActivityCounts,
    pub generated_at: String,
}

/// The linked child's standing as shown on a parent's progress screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildSummary {
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub points: i64,
    pub level: LevelState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentProgress {
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<ChildSummary>,
    pub generated_at: String,
}

/// Role-conditional progress payload. Parents carry no personal stats;
/// their activity is defined as zero and omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum ProgressOverview {
    Student(StudentProgress),
    Tutor(StudentProgress),
    Teacher(TeacherProgress),
    Parent(ParentProgress),
}
