//! Wall-clock time-of-day labels of a daily series.
//!
//! The backend labels every chart point with `ccAxisXValue`, which is usually
//! `"HH:MM"` but has also been observed as an epoch number, an ISO date-time,
//! or a 12-hour `"h:mm pm"` string depending on the device firmware.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Local, Timelike};

use crate::prelude::*;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Time of day as minutes since local midnight.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimeLabel(u16);

impl std::fmt::Debug for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl TimeLabel {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        #[allow(clippy::cast_possible_truncation)]
        let minutes_of_day = (hours * 60 + minutes) as u16;
        (hours < 24 && minutes < 60).then_some(Self(minutes_of_day))
    }

    pub const fn minutes_of_day(self) -> u16 {
        self.0
    }

    /// Interpret a raw `ccAxisXValue`.
    ///
    /// Numbers are epoch seconds (or milliseconds when too large for seconds),
    /// strings are tried as ISO date-times and then as `HH:MM` forms. Anything
    /// unrecognized yields `None`: the sample is kept, but is never classified
    /// as night.
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(number) => {
                let value = number.as_f64()?;
                #[allow(clippy::cast_possible_truncation)]
                let millis = if value < 1e12 { (value * 1000.0) as i64 } else { value as i64 };
                let timestamp = DateTime::from_timestamp_millis(millis)?.with_timezone(&Local);
                Self::new(timestamp.hour(), timestamp.minute())
            }
            serde_json::Value::String(string) => {
                if let Ok(timestamp) = DateTime::parse_from_rfc3339(string) {
                    let local = timestamp.with_timezone(&Local);
                    return Self::new(local.hour(), local.minute());
                }
                if let Ok(naive) =
                    chrono::NaiveDateTime::parse_from_str(string, "%Y-%m-%dT%H:%M:%S")
                {
                    return Self::new(naive.hour(), naive.minute());
                }
                string.parse().ok()
            }
            _ => None,
        }
    }

    /// Night per the solar suppression window: `[start, midnight)` and
    /// `[midnight, morning end)`.
    pub fn is_night(self, window: NightWindow) -> bool {
        self >= window.start || self < window.morning_end
    }
}

impl FromStr for TimeLabel {
    type Err = Error;

    /// Parse `"HH:MM"`, `"HH:MM:SS"`, optionally suffixed with `am`/`pm`.
    fn from_str(string: &str) -> Result<Self> {
        let string = string.trim();
        let lowercase = string.to_lowercase();
        let (string, meridiem) = if let Some(prefix) = lowercase.strip_suffix("am") {
            (prefix.trim_end(), Some(Meridiem::Am))
        } else if let Some(prefix) = lowercase.strip_suffix("pm") {
            (prefix.trim_end(), Some(Meridiem::Pm))
        } else {
            (lowercase.as_str(), None)
        };

        let mut parts = string.splitn(3, ':');
        let mut hours: u32 = parts
            .next()
            .with_context(|| format!("no hours in `{string}`"))?
            .parse()
            .with_context(|| format!("bad hours in `{string}`"))?;
        let minutes: u32 = parts
            .next()
            .with_context(|| format!("no minutes in `{string}`"))?
            .parse()
            .with_context(|| format!("bad minutes in `{string}`"))?;
        if let Some(seconds) = parts.next() {
            let _: u32 =
                seconds.parse().with_context(|| format!("bad seconds in `{string}`"))?;
        }
        match meridiem {
            Some(Meridiem::Pm) if hours < 12 => hours += 12,
            Some(Meridiem::Am) if hours == 12 => hours = 0,
            _ => {}
        }
        Self::new(hours, minutes)
            .with_context(|| format!("`{string}` is not a valid time of day"))
    }
}

impl Display for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[derive(Copy, Clone)]
enum Meridiem {
    Am,
    Pm,
}

/// Solar night suppression window, wrapping midnight.
#[derive(Copy, Clone, Debug)]
pub struct NightWindow {
    /// Evening start of the window, inclusive.
    pub start: TimeLabel,

    /// Morning end of the window, exclusive.
    pub morning_end: TimeLabel,
}

impl Default for NightWindow {
    /// The observed sensor noise window: 19:00 through 05:30.
    fn default() -> Self {
        Self { start: TimeLabel(19 * 60), morning_end: TimeLabel(5 * 60 + 30) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_twenty_four_hour() -> Result {
        assert_eq!("06:15".parse::<TimeLabel>()?, TimeLabel::new(6, 15).unwrap());
        assert_eq!("23:59".parse::<TimeLabel>()?, TimeLabel::new(23, 59).unwrap());
        Ok(())
    }

    #[test]
    fn test_parse_with_seconds() -> Result {
        assert_eq!("06:15:42".parse::<TimeLabel>()?, TimeLabel::new(6, 15).unwrap());
        Ok(())
    }

    #[test]
    fn test_parse_meridiem() -> Result {
        assert_eq!("11:30 pm".parse::<TimeLabel>()?, TimeLabel::new(23, 30).unwrap());
        assert_eq!("12:05am".parse::<TimeLabel>()?, TimeLabel::new(0, 5).unwrap());
        assert_eq!("12:05 PM".parse::<TimeLabel>()?, TimeLabel::new(12, 5).unwrap());
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!("".parse::<TimeLabel>().is_err());
        assert!("25:00".parse::<TimeLabel>().is_err());
        assert!("12:60".parse::<TimeLabel>().is_err());
        assert!("noon".parse::<TimeLabel>().is_err());
    }

    #[test]
    fn test_from_json_hh_mm() {
        let value = serde_json::Value::from("14:25");
        assert_eq!(TimeLabel::from_json_value(&value), TimeLabel::new(14, 25));
    }

    #[test]
    fn test_from_json_epoch_seconds_and_millis_agree() {
        let seconds = serde_json::Value::from(1_726_400_000);
        let millis = serde_json::Value::from(1_726_400_000_000_i64);
        let label = TimeLabel::from_json_value(&seconds);
        assert!(label.is_some());
        assert_eq!(label, TimeLabel::from_json_value(&millis));
    }

    #[test]
    fn test_from_json_naive_iso() {
        let value = serde_json::Value::from("2025-03-01T06:45:00");
        assert_eq!(TimeLabel::from_json_value(&value), TimeLabel::new(6, 45));
    }

    #[test]
    fn test_from_json_unknown() {
        assert_eq!(TimeLabel::from_json_value(&serde_json::Value::Null), None);
        assert_eq!(TimeLabel::from_json_value(&serde_json::Value::from("Unknown")), None);
    }

    #[test]
    fn test_night_window_boundaries() {
        let window = NightWindow::default();
        for (label, expected) in [
            ("19:00", true),
            ("23:59", true),
            ("00:00", true),
            ("05:29", true),
            ("05:30", false),
            ("12:00", false),
            ("18:59", false),
        ] {
            let label: TimeLabel = label.parse().unwrap();
            assert_eq!(label.is_night(window), expected, "{label}");
        }
    }
}
