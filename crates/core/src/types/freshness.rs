//! Expiry classification for stocked items.
//!
//! Classification works on calendar days only. [`chrono::NaiveDate`] has no
//! time component, so comparing two dates compares calendar days directly
//! and the usual off-by-one traps from time-of-day arithmetic cannot occur.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days ahead (inclusive) that counts as "expiring soon".
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 7;

/// Freshness state of a perishable item relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// Not expiring within the warning window, or no expiry date at all.
    Fresh,
    /// Expires between today and today + 7 days, both ends inclusive.
    ExpiringSoon,
    /// Expiry date is strictly before today.
    Expired,
}

impl Freshness {
    /// Whether this state should be surfaced as a warning.
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::ExpiringSoon | Self::Expired)
    }
}

impl core::fmt::Display for Freshness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Fresh => "fresh",
            Self::ExpiringSoon => "expiring soon",
            Self::Expired => "expired",
        };
        write!(f, "{label}")
    }
}

/// Classify an optional expiry date against a reference day.
///
/// Rules:
/// - no expiry date: [`Freshness::Fresh`] - items without a date are never
///   flagged
/// - strictly before `today`: [`Freshness::Expired`]
/// - `today` through `today + 7` days, both endpoints inclusive:
///   [`Freshness::ExpiringSoon`] - an item expiring today is still
///   "expiring soon", not "expired"
/// - anything later: [`Freshness::Fresh`]
///
/// Pure function over its arguments. Callers must pass `today` at call
/// time and never reuse a classification across days.
#[must_use]
pub fn classify(expires_on: Option<NaiveDate>, today: NaiveDate) -> Freshness {
    let Some(expires_on) = expires_on else {
        return Freshness::Fresh;
    };

    if expires_on < today {
        return Freshness::Expired;
    }

    // expires_on >= today, so the day difference is non-negative and the
    // subtraction cannot overflow.
    let days_left = expires_on.signed_duration_since(today).num_days();
    if days_left <= EXPIRING_SOON_WINDOW_DAYS {
        Freshness::ExpiringSoon
    } else {
        Freshness::Fresh
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_absent_date_is_fresh() {
        assert_eq!(classify(None, date(2024, 6, 10)), Freshness::Fresh);
    }

    #[test]
    fn test_day_before_today_is_expired() {
        let today = date(2024, 6, 10);
        assert_eq!(classify(Some(date(2024, 6, 9)), today), Freshness::Expired);
        assert_eq!(classify(Some(date(2023, 1, 1)), today), Freshness::Expired);
    }

    #[test]
    fn test_today_is_expiring_soon_not_expired() {
        let today = date(2024, 6, 10);
        assert_eq!(classify(Some(today), today), Freshness::ExpiringSoon);
    }

    #[test]
    fn test_window_far_boundary_inclusive() {
        let today = date(2024, 6, 10);
        // Exactly 7 days out is still inside the window.
        assert_eq!(
            classify(Some(date(2024, 6, 17)), today),
            Freshness::ExpiringSoon
        );
        // 8 days out is not.
        assert_eq!(classify(Some(date(2024, 6, 18)), today), Freshness::Fresh);
    }

    #[test]
    fn test_every_day_in_window() {
        let today = date(2024, 6, 10);
        for offset in 0..=EXPIRING_SOON_WINDOW_DAYS {
            let d = today + chrono::Days::new(u64::try_from(offset).unwrap());
            assert_eq!(classify(Some(d), today), Freshness::ExpiringSoon, "day +{offset}");
        }
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = date(2024, 1, 28);
        assert_eq!(
            classify(Some(date(2024, 2, 4)), today),
            Freshness::ExpiringSoon
        );
        assert_eq!(classify(Some(date(2024, 2, 5)), today), Freshness::Fresh);
    }

    #[test]
    fn test_window_crosses_leap_day() {
        let today = date(2024, 2, 26);
        assert_eq!(
            classify(Some(date(2024, 3, 4)), today),
            Freshness::ExpiringSoon
        );
        assert_eq!(classify(Some(date(2024, 3, 5)), today), Freshness::Fresh);
    }

    #[test]
    fn test_needs_attention() {
        assert!(!Freshness::Fresh.needs_attention());
        assert!(Freshness::ExpiringSoon.needs_attention());
        assert!(Freshness::Expired.needs_attention());
    }

    #[test]
    fn test_display() {
        assert_eq!(Freshness::ExpiringSoon.to_string(), "expiring soon");
    }
}
