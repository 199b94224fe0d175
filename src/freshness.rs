//! Reporting-gap check: is the site still phoning home?

use chrono::{DateTime, Local, Timelike};

use crate::timelabel::{MINUTES_PER_DAY, TimeLabel};

/// A site is considered fresh while its last sample is at most this old.
pub const MAX_REPORTING_GAP_MINUTES: i64 = 30;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Freshness {
    Fresh,
    Stale,
}

impl Freshness {
    /// Classify the last live sample's label against the reference moment.
    ///
    /// The label carries no date, so a label later than the reference
    /// time-of-day is read as yesterday's sample (midnight wrap). A missing
    /// label is stale.
    pub fn classify(last_label: Option<TimeLabel>, now: DateTime<Local>) -> Self {
        let Some(label) = last_label else {
            return Self::Stale;
        };
        let now_minutes = i64::from(now.hour() * 60 + now.minute());
        let label_minutes = i64::from(label.minutes_of_day());
        let gap = if label_minutes > now_minutes {
            now_minutes + i64::from(MINUTES_PER_DAY) - label_minutes
        } else {
            now_minutes - label_minutes
        };
        if gap <= MAX_REPORTING_GAP_MINUTES { Self::Fresh } else { Self::Stale }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn label(string: &str) -> Option<TimeLabel> {
        Some(string.parse().unwrap())
    }

    #[test]
    fn test_recent_sample_is_fresh() {
        assert_eq!(Freshness::classify(label("11:45"), noon()), Freshness::Fresh);
        assert_eq!(Freshness::classify(label("11:30"), noon()), Freshness::Fresh);
    }

    #[test]
    fn test_old_sample_is_stale() {
        assert_eq!(Freshness::classify(label("11:29"), noon()), Freshness::Stale);
        assert_eq!(Freshness::classify(label("06:00"), noon()), Freshness::Stale);
    }

    #[test]
    fn test_midnight_wrap() {
        let shortly_after_midnight = Local.with_ymd_and_hms(2026, 3, 14, 0, 10, 0).unwrap();
        assert_eq!(
            Freshness::classify(label("23:50"), shortly_after_midnight),
            Freshness::Fresh
        );
        assert_eq!(
            Freshness::classify(label("22:00"), shortly_after_midnight),
            Freshness::Stale
        );
    }

    #[test]
    fn test_missing_label_is_stale() {
        assert_eq!(Freshness::classify(None, noon()), Freshness::Stale);
    }
}
