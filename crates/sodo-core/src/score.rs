//! Final score of a solved game.

use std::time::Duration;

/// Score before penalties.
pub const BASE_SCORE: u32 = 1000;

/// Lowest score a solved game can get.
pub const MIN_SCORE: u32 = 100;

const MAX_TIME_PENALTY: u32 = 500;
const HINT_PENALTY: u32 = 100;
const MISTAKE_PENALTY: u32 = 50;

/// Scores a solved game.
///
/// Every elapsed second costs two points, capped at 500. Each hint costs 100
/// and each mistake 50. The result never drops below [`MIN_SCORE`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use sodo_core::score;
///
/// assert_eq!(score(Duration::from_secs(100), 1, 2), 600);
/// assert_eq!(score(Duration::from_secs(3600), 3, 5), 100);
/// ```
#[must_use]
pub fn score(elapsed: Duration, hints: u32, mistakes: u32) -> u32 {
    let seconds = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
    let penalty = seconds
        .saturating_mul(2)
        .min(MAX_TIME_PENALTY)
        .saturating_add(hints.saturating_mul(HINT_PENALTY))
        .saturating_add(mistakes.saturating_mul(MISTAKE_PENALTY));
    BASE_SCORE.saturating_sub(penalty).max(MIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_clean_game_keeps_most_points() {
        assert_eq!(score(Duration::ZERO, 0, 0), BASE_SCORE);
        assert_eq!(score(Duration::from_millis(1999), 0, 0), 998);
    }

    #[test]
    fn time_penalty_is_capped() {
        assert_eq!(score(Duration::from_secs(250), 0, 0), 500);
        assert_eq!(score(Duration::from_secs(10_000), 0, 0), 500);
        assert_eq!(score(Duration::from_secs(10_000), 1, 1), 350);
    }

    #[test]
    fn score_has_a_floor() {
        assert_eq!(score(Duration::from_secs(300), 3, 4), MIN_SCORE);
        assert_eq!(score(Duration::MAX, u32::MAX, u32::MAX), MIN_SCORE);
    }
}
