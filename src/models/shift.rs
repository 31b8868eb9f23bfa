//! Shift model and related types.
//!
//! This module defines the Shift struct for representing scheduled work
//! intervals, including the midnight-crossing normalization used by every
//! working-time rule.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in a calendar day.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// The scheduling tag assigned to a shift.
///
/// Only `Night` drives a validation rule (the night-hours limit); the
/// other tags exist so the closed set round-trips through serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Morning shift (typically 08:00-16:00).
    Morning,
    /// Evening shift (typically 16:00-22:00).
    Evening,
    /// Night shift (typically 22:00-06:00), subject to the night-hours limit.
    Night,
}

/// Serde helper for times-of-day serialized as `"HH:MM"`.
///
/// Scheduling frontends send minute-resolution time strings; `"HH:MM:SS"`
/// is accepted on input for tolerance.
pub(crate) mod short_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Represents a single scheduled work interval for one calendar date.
///
/// A shift whose end time is less than or equal to its start time crosses
/// midnight and ends on the following day. That interpretation is
/// load-bearing and applied uniformly by [`Shift::worked_minutes`] and
/// [`Shift::end_datetime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The assigned employee, if any. Unassigned shifts are excluded from
    /// all validation.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift.
    #[serde(with = "short_time")]
    pub start_time: NaiveTime,
    /// The end time of the shift.
    #[serde(with = "short_time")]
    pub end_time: NaiveTime,
    /// Unpaid break minutes subtracted from the gross duration.
    #[serde(default)]
    pub break_duration_minutes: i64,
    /// Optional scheduling tag; `night` activates the night-hours rule.
    #[serde(default)]
    pub shift_type: Option<ShiftType>,
}

impl Shift {
    /// Returns whether the shift crosses midnight.
    ///
    /// An end time equal to the start time counts as a full 24-hour
    /// wraparound, matching the scheduling convention.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Calculates the worked minutes for the shift.
    ///
    /// Gross duration is `(end - start) mod 24h`; the break is subtracted
    /// from it. A break longer than the gross duration is not floored at
    /// zero, so callers see the raw (possibly negative) figure.
    ///
    /// # Examples
    ///
    /// ```
    /// use compliance_engine::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: Some("emp_001".to_string()),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     break_duration_minutes: 0,
    ///     shift_type: None,
    /// };
    /// assert_eq!(shift.worked_minutes(), 480); // overnight, 8 hours
    /// ```
    pub fn worked_minutes(&self) -> i64 {
        let start = minutes_since_midnight(self.start_time);
        let mut end = minutes_since_midnight(self.end_time);
        if end <= start {
            end += MINUTES_PER_DAY;
        }
        end - start - self.break_duration_minutes
    }

    /// Calculates the worked hours for the shift as a Decimal.
    pub fn worked_hours(&self) -> Decimal {
        Decimal::new(self.worked_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns the absolute start instant of the shift.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Returns the absolute end instant of the shift.
    ///
    /// For a midnight-crossing shift the end instant falls on the day
    /// after [`Shift::date`].
    pub fn end_datetime(&self) -> NaiveDateTime {
        let end_date = if self.crosses_midnight() {
            self.date + Days::new(1)
        } else {
            self.date
        };
        end_date.and_time(self.end_time)
    }
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    time.signed_duration_since(NaiveTime::MIN).num_minutes()
}
