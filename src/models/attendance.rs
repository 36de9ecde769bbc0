//! Attendance record model and derived attendance status.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::lenient;

/// The status the backend assigns to a day's attendance.
///
/// The engine never derives this from timestamps; it only reads it for
/// summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The employee attended.
    Present,
    /// The employee was absent without leave.
    Absent,
    /// The employee was on approved leave.
    Leave,
    /// The employee worked half a day.
    HalfDay,
    /// The day has not been classified yet.
    #[default]
    Pending,
}

/// One calendar day's attendance for one employee.
///
/// Check-in and check-out timestamps that cannot be parsed deserialize as
/// absent.
///
/// # Example
///
/// ```
/// use hrms_engine::models::{AttendanceRecord, DayStatus};
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "id": 11,
///     "date": "2026-01-15",
///     "check_in_time": "2026-01-15T09:00:00",
///     "check_out_time": "garbage",
///     "status": "present",
///     "employee_profile_id": 4
/// }"#).unwrap();
///
/// assert!(record.check_in_time.is_some());
/// assert!(record.check_out_time.is_none());
/// assert_eq!(record.status, DayStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Backend identifier, when the record has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// When the employee checked in.
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub check_in_time: Option<NaiveDateTime>,
    /// When the employee checked out.
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub check_out_time: Option<NaiveDateTime>,
    /// The status assigned by the backend.
    #[serde(default)]
    pub status: DayStatus,
    /// Owning employee profile.
    pub employee_profile_id: i64,
    /// Free-form notes from manual entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The check-in state shown on the attendance widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Checked in today but not yet out.
    #[serde(rename = "checked-in")]
    CheckedIn,
    /// Checked in and out today.
    #[serde(rename = "checked-out")]
    CheckedOut,
    /// No usable record for today.
    #[serde(rename = "none")]
    NotCheckedIn,
}

impl AttendanceStatus {
    /// The wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::CheckedIn => "checked-in",
            AttendanceStatus::CheckedOut => "checked-out",
            AttendanceStatus::NotCheckedIn => "none",
        }
    }
}
