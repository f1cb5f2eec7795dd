//! Recurring daily time windows

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A recurring daily time window with inclusive bounds
///
/// There is no `start <= end` invariant: a window such as `22:00~04:00`
/// wraps past midnight and matches both late-evening and early-morning
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start of the window
    pub start: NaiveTime,
    /// Inclusive end of the window
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Create a window from two times of day
    #[must_use]
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Check whether the window wraps past midnight
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Decide whether a timestamp's time of day falls inside the window
    ///
    /// Seconds are truncated before comparison, so a window ending at
    /// `17:00` still accepts `17:00:59`. The timestamp's local hour and
    /// minute are used as parsed; no timezone conversion happens here.
    #[must_use]
    pub fn contains(&self, timestamp: &DateTime<FixedOffset>) -> bool {
        let time_of_day = timestamp
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_else(|| timestamp.time());

        if self.start <= self.end {
            self.start <= time_of_day && time_of_day <= self.end
        } else {
            // Window spans midnight, e.g. 22:00~04:00
            time_of_day >= self.start || time_of_day <= self.end
        }
    }
}

impl Default for TimeWindow {
    /// The full day, `00:00:00` through `23:59:59`
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN,
            end: NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Errors from parsing the `HH:MM~HH:MM` window syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeWindowParseError {
    /// The input has no `~` between the two bounds
    #[error("expected a window of the form HH:MM~HH:MM, got {input:?}")]
    MissingSeparator {
        /// The full input string
        input: String,
    },

    /// One of the bounds is not a valid time of day
    #[error("invalid time of day {value:?}")]
    BadTime {
        /// The bound that failed to parse
        value: String,
    },
}

impl FromStr for TimeWindow {
    type Err = TimeWindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('~')
            .ok_or_else(|| TimeWindowParseError::MissingSeparator {
                input: s.to_string(),
            })?;
        Ok(Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?))
    }
}

/// Parse one window bound, with or without a seconds component
fn parse_time_of_day(value: &str) -> Result<NaiveTime, TimeWindowParseError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| TimeWindowParseError::BadTime {
            value: value.to_string(),
        })
}
