use crate::error::{AppError, AppResult};
use crate::models::activity::{ActivityCounts, ScoreBreakdown};
use crate::models::leaderboard::{CohortMember, LeaderboardEntry, Medal, RankedLeaderboard};
use crate::models::profile::Role;
use crate::models::progress::{Badge, LevelState};

pub const QUESTION_POINTS: i64 = 10;
pub const ANSWER_POINTS: i64 = 5;
pub const UPVOTE_POINTS: i64 = 2;

pub const LEVEL_SIZE: i64 = 200;
pub const TUTOR_PROMOTION_POINTS: i64 = 200;
pub const LEADERBOARD_LIMIT: usize = 10;

const HELPFUL_ANSWER_MIN_ANSWERS: i64 = 4;
const TOP_CONTRIBUTOR_MIN_ANSWERS: i64 = 10;
const CURIOUS_MIND_MIN_QUESTIONS: i64 = 5;
const PEER_CLUB_MIN_POINTS: i64 = 400;
const PEER_TUTOR_MIN_POINTS: i64 = 200;
const LEVEL_MASTER_MIN_LEVEL: i64 = 5;

/// Derive the point total from an activity snapshot.
pub fn compute_score(counts: &ActivityCounts) -> AppResult<ScoreBreakdown> {
    ensure_counts(counts)?;

    let points = QUESTION_POINTS * counts.questions_asked
        + ANSWER_POINTS * counts.answers_given
        + UPVOTE_POINTS * counts.upvotes_received;

    Ok(ScoreBreakdown { points })
}

/// Derive the level state from stored points at the product level size.
pub fn compute_level(points: i64) -> AppResult<LevelState> {
    compute_level_with(points, LEVEL_SIZE)
}

pub fn compute_level_with(points: i64, level_size: i64) -> AppResult<LevelState> {
    if points < 0 {
        return Err(AppError::invalid_input(format!(
            "points must be non-negative, got {points}"
        )));
    }
    if level_size <= 0 {
        return Err(AppError::invalid_input(format!(
            "level size must be positive, got {level_size}"
        )));
    }

    // Zero points reads as "level 1, nothing earned yet", never as an
    // already-complete level with threshold 0.
    let (level, progress) = if points > 0 {
        (points / level_size + 1, points % level_size)
    } else {
        (1, 0)
    };

    Ok(LevelState {
        level,
        current_level_progress: progress,
        next_level_threshold: level * level_size,
    })
}

/// Evaluate the badge set in display order. Every gate is independent,
/// so the result is a pure function of the inputs and recomputing from
/// the same snapshot always yields the same set.
pub fn compute_badges(counts: &ActivityCounts, points: i64, level: i64) -> AppResult<Vec<Badge>> {
    ensure_counts(counts)?;
    if points < 0 {
        return Err(AppError::invalid_input(format!(
            "points must be non-negative, got {points}"
        )));
    }
    if level < 1 {
        return Err(AppError::invalid_input(format!(
            "level must be at least 1, got {level}"
        )));
    }

    let mut badges = Vec::new();
    if counts.questions_asked >= 1 {
        badges.push(Badge::FirstQuestion);
    }
    if counts.answers_given >= HELPFUL_ANSWER_MIN_ANSWERS {
        badges.push(Badge::HelpfulAnswer);
    }
    if counts.answers_given >= TOP_CONTRIBUTOR_MIN_ANSWERS {
        badges.push(Badge::TopContributor);
    }
    if counts.questions_asked >= CURIOUS_MIND_MIN_QUESTIONS {
        badges.push(Badge::CuriousMind);
    }
    if points >= PEER_CLUB_MIN_POINTS {
        badges.push(Badge::PeerClub);
    }
    if points >= PEER_TUTOR_MIN_POINTS {
        badges.push(Badge::PeerTutor);
    }
    if level >= LEVEL_MASTER_MIN_LEVEL {
        badges.push(Badge::LevelMaster);
    }

    Ok(badges)
}

/// Promotion eligibility check. Persisting the role change belongs to
/// the caller; once the role is no longer `Student` this returns false,
/// which makes re-evaluation after promotion a no-op.
pub fn should_promote_to_tutor(points: i64, role: Role) -> bool {
    role == Role::Student && points >= TUTOR_PROMOTION_POINTS
}

/// Rank a cohort: stable descending sort by points (ties keep fetch
/// order), 1-based ranks, display list capped at `limit`. The viewer's
/// rank is taken from the full cohort even when it falls outside the
/// capped list.
pub fn rank_leaderboard(
    members: Vec<CohortMember>,
    self_id: &str,
    limit: usize,
) -> RankedLeaderboard {
    let mut sorted = members;
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    let cohort_size = sorted.len();
    let self_rank = sorted
        .iter()
        .position(|member| member.user_id == self_id)
        .map(|index| index as i64 + 1);

    let entries = sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, member)| {
            let rank = index as i64 + 1;
            LeaderboardEntry {
                rank,
                medal: Medal::for_rank(rank),
                is_self: member.user_id == self_id,
                user_id: member.user_id,
                display_name: member.display_name,
                points: member.points,
                profile_image_ref: member.profile_image_ref,
            }
        })
        .collect();

    RankedLeaderboard {
        entries,
        self_rank,
        cohort_size,
    }
}

fn ensure_counts(counts: &ActivityCounts) -> AppResult<()> {
    if counts.questions_asked < 0 || counts.answers_given < 0 || counts.upvotes_received < 0 {
        return Err(AppError::invalid_input_with_details(
            "activity counts must be non-negative",
            serde_json::json!({
                "questionsAsked": counts.questions_asked,
                "answersGiven": counts.answers_given,
                "upvotesReceived": counts.upvotes_received,
            }),
        ));
    }
    Ok(())
}
