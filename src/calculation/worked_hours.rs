//! Worked time and overtime for a single attendance day.
//!
//! Durations are whole minutes, truncated, and displayed as `HH:MM`.
//! Anything past a full 8-hour day counts as overtime.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Minutes in a full working day; minutes beyond this are overtime.
pub const FULL_DAY_THRESHOLD_MINUTES: i64 = 480;

/// Placeholder shown instead of a duration when a day has no complete
/// check-in/check-out pair.
pub const DURATION_PLACEHOLDER: &str = "--:--";

/// A non-negative duration in whole minutes.
///
/// Serializes as its `HH:MM` display form.
///
/// # Example
///
/// ```
/// use hrms_engine::calculation::WorkDuration;
///
/// assert_eq!(WorkDuration::from_minutes(570).to_string(), "09:30");
/// assert_eq!(WorkDuration::from_minutes(-15).to_string(), "00:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkDuration {
    minutes: i64,
}

impl WorkDuration {
    /// The zero duration.
    pub const ZERO: WorkDuration = WorkDuration { minutes: 0 };

    /// Creates a duration, clamping negative values to zero.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.max(0),
        }
    }

    /// Total minutes.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whole hours component.
    pub fn hours_part(&self) -> i64 {
        self.minutes / 60
    }

    /// Remaining minutes after whole hours.
    pub fn minutes_part(&self) -> i64 {
        self.minutes % 60
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours_part(), self.minutes_part())
    }
}

impl Serialize for WorkDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let text = String::deserialize(deserializer)?;
        let (hours, minutes) = text
            .split_once(':')
            .ok_or_else(|| D::Error::custom(format!("expected HH:MM, got '{}'", text)))?;
        let hours: i64 = hours.parse().map_err(D::Error::custom)?;
        let minutes: i64 = minutes.parse().map_err(D::Error::custom)?;
        if hours < 0 || !(0..60).contains(&minutes) {
            return Err(D::Error::custom(format!("duration out of range: '{}'", text)));
        }
        hours
            .checked_mul(60)
            .and_then(|total| total.checked_add(minutes))
            .map(WorkDuration::from_minutes)
            .ok_or_else(|| D::Error::custom(format!("duration too large: '{}'", text)))
    }
}

/// Worked and overtime durations for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedAndOvertime {
    /// Time between check-in and check-out.
    pub worked: WorkDuration,
    /// Worked time beyond [`FULL_DAY_THRESHOLD_MINUTES`].
    pub overtime: WorkDuration,
    /// False when either timestamp was missing.
    pub recorded: bool,
}

impl WorkedAndOvertime {
    /// Returns true when both timestamps were present.
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Worked time for a table cell, or [`DURATION_PLACEHOLDER`].
    pub fn worked_display(&self) -> String {
        if self.recorded {
            self.worked.to_string()
        } else {
            DURATION_PLACEHOLDER.to_string()
        }
    }

    /// Overtime for a table cell, or [`DURATION_PLACEHOLDER`].
    pub fn overtime_display(&self) -> String {
        if self.recorded {
            self.overtime.to_string()
        } else {
            DURATION_PLACEHOLDER.to_string()
        }
    }
}

/// Computes worked time and overtime from a check-in/check-out pair.
///
/// Missing timestamps give zero durations with `recorded == false`. A
/// check-out earlier than the check-in gives zero durations as well.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::compute_worked_and_overtime;
/// use chrono::NaiveDateTime;
///
/// let check_in = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out = NaiveDateTime::parse_from_str("2026-01-15 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = compute_worked_and_overtime(Some(check_in), Some(check_out));
/// assert_eq!(result.worked.to_string(), "09:30");
/// assert_eq!(result.overtime.to_string(), "01:30");
///
/// let open = compute_worked_and_overtime(Some(check_in), None);
/// assert_eq!(open.worked.minutes(), 0);
/// assert_eq!(open.worked_display(), "--:--");
/// ```
pub fn compute_worked_and_overtime(
    check_in: Option<NaiveDateTime>,
    check_out: Option<NaiveDateTime>,
) -> WorkedAndOvertime {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return WorkedAndOvertime::default();
    };

    let worked_minutes = (check_out - check_in).num_minutes().max(0);
    let overtime_minutes = (worked_minutes - FULL_DAY_THRESHOLD_MINUTES).max(0);

    WorkedAndOvertime {
        worked: WorkDuration::from_minutes(worked_minutes),
        overtime: WorkDuration::from_minutes(overtime_minutes),
        recorded: true,
    }
}
