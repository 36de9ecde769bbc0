//! Today's check-in state, derived from recent attendance records.
//!
//! The resolver has no transitions of its own: check-in and check-out happen
//! in the backend, after which the caller re-fetches records and resolves
//! again.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Today's status together with the record it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodayAttendance<'a> {
    /// The derived check-in state.
    pub status: AttendanceStatus,
    /// Today's record, when the most recent record is dated today.
    pub record: Option<&'a AttendanceRecord>,
}

fn most_recent(records: &[AttendanceRecord]) -> Option<&AttendanceRecord> {
    // Keeps the first of equal dates so newest-first input wins ties.
    records
        .iter()
        .reduce(|best, record| if record.date > best.date { record } else { best })
}

fn classify(record: &AttendanceRecord) -> AttendanceStatus {
    if record.check_out_time.is_some() {
        AttendanceStatus::CheckedOut
    } else if record.check_in_time.is_some() {
        AttendanceStatus::CheckedIn
    } else {
        AttendanceStatus::NotCheckedIn
    }
}

/// Resolves today's status and returns today's record alongside it.
///
/// Only the most recent record (by date) is considered. If it is not dated
/// `today` the status is [`AttendanceStatus::NotCheckedIn`] and no record is
/// returned.
///
/// `today` is a plain calendar date; callers pick the timezone it is taken
/// in and should use the same basis the backend uses for record dates.
pub fn resolve_today(records: &[AttendanceRecord], today: NaiveDate) -> TodayAttendance<'_> {
    match most_recent(records) {
        Some(record) if record.date == today => TodayAttendance {
            status: classify(record),
            record: Some(record),
        },
        _ => TodayAttendance {
            status: AttendanceStatus::NotCheckedIn,
            record: None,
        },
    }
}

/// Maps attendance records to today's check-in state.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::resolve_status;
/// use hrms_engine::models::{AttendanceRecord, AttendanceStatus, DayStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let record = AttendanceRecord {
///     id: Some(1),
///     date: today,
///     check_in_time: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").ok(),
///     check_out_time: None,
///     status: DayStatus::Present,
///     employee_profile_id: 4,
///     notes: None,
/// };
///
/// assert_eq!(resolve_status(&[record], today), AttendanceStatus::CheckedIn);
/// assert_eq!(resolve_status(&[], today), AttendanceStatus::NotCheckedIn);
/// ```
pub fn resolve_status(records: &[AttendanceRecord], today: NaiveDate) -> AttendanceStatus {
    resolve_today(records, today).status
}
