use serde::{Deserialize, Serialize};

/// Immutable snapshot of a user's raw activity counts at computation
/// time. Counts must be non-negative; the stats engine rejects
/// anything else.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounts {
    pub questions_asked: i64,
    pub answers_given: i64,
    pub upvotes_received: i64,
}

/// Point total derived from an activity snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub points: i64,
}
