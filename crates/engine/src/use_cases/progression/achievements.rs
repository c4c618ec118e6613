//! Achievement evaluation against session statistics.

use chrono::{DateTime, Utc};

use critterquiz_domain::{all_achievements, Achievement, GameStatistics};

/// Achievements `stats` now satisfy that are not already in `unlocked`.
///
/// Unlocking is idempotent per id: re-running after every round never
/// produces a second copy of the same achievement.
pub fn newly_earned(
    stats: &GameStatistics,
    unlocked: &[Achievement],
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    all_achievements()
        .into_iter()
        .filter(|candidate| !unlocked.iter().any(|a| a.id == candidate.id))
        .filter(|candidate| candidate.is_earned(stats))
        .map(|candidate| candidate.unlock(now))
        .collect()
}
