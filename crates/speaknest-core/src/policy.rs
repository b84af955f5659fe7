//! Fixed interval policy of the word review feature.
//!
//! | difficulty | next review in |
//! |------------|----------------|
//! | hard       | 1 day          |
//! | medium     | 3 days         |
//! | easy       | 7 days         |

use chrono::{DateTime, Duration, Utc};
use speaknest_types::Difficulty;

pub fn interval_days(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Hard => 1,
        Difficulty::Medium => 3,
        Difficulty::Easy => 7,
    }
}

pub fn interval_for(difficulty: Difficulty) -> Duration {
    Duration::days(interval_days(difficulty))
}

/// Timestamp of the next review when `difficulty` is chosen at `now`
pub fn next_review_at(difficulty: Difficulty, now: DateTime<Utc>) -> DateTime<Utc> {
    now + interval_for(difficulty)
}

/// Short label for an interval, as shown on rating buttons
pub fn format_interval(days: i64) -> String {
    match days {
        i64::MIN..=0 => "now".to_string(),
        1..=6 => format!("{days}d"),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_table() {
        assert_eq!(interval_for(Difficulty::Hard), Duration::days(1));
        assert_eq!(interval_for(Difficulty::Medium), Duration::days(3));
        assert_eq!(interval_for(Difficulty::Easy), Duration::days(7));
    }

    #[test]
    fn test_next_review_is_after_now() {
        let now = Utc::now();
        for difficulty in Difficulty::ALL {
            assert!(next_review_at(difficulty, now) > now);
        }
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(3), "3d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(730), "2y");
    }
}
