//! Monthly attendance totals for the attendance page.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::worked_hours::{compute_worked_and_overtime, WorkDuration};
use crate::models::{AttendanceRecord, DayStatus};

/// Per-status day counts and time totals for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub days_present: u32,
    /// Days marked as half days.
    pub half_days: u32,
    /// Days on approved leave.
    pub leave_days: u32,
    /// Days marked absent.
    pub absent_days: u32,
    /// Days not yet classified.
    pub pending_days: u32,
    /// Present, half and leave days together.
    pub total_working_days: u32,
    /// Sum of worked minutes over days with both timestamps.
    pub worked_minutes: i64,
    /// Sum of overtime minutes over days with both timestamps.
    pub overtime_minutes: i64,
}

impl AttendanceSummary {
    /// Total worked time as a duration.
    pub fn worked(&self) -> WorkDuration {
        WorkDuration::from_minutes(self.worked_minutes)
    }

    /// Total overtime as a duration.
    pub fn overtime(&self) -> WorkDuration {
        WorkDuration::from_minutes(self.overtime_minutes)
    }
}

/// Summarizes the records that fall within `year`-`month`.
///
/// Records outside the month are ignored. A month outside `1..=12` gives an
/// empty summary.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::summarize_month;
/// use hrms_engine::models::{AttendanceRecord, DayStatus};
/// use chrono::NaiveDate;
///
/// let records: Vec<AttendanceRecord> = [(5, DayStatus::Present), (6, DayStatus::Leave)]
///     .into_iter()
///     .map(|(day, status)| AttendanceRecord {
///         id: None,
///         date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
///         check_in_time: None,
///         check_out_time: None,
///         status,
///         employee_profile_id: 4,
///         notes: None,
///     })
///     .collect();
///
/// let summary = summarize_month(&records, 2026, 1);
/// assert_eq!(summary.days_present, 1);
/// assert_eq!(summary.leave_days, 1);
/// assert_eq!(summary.total_working_days, 2);
/// ```
pub fn summarize_month(records: &[AttendanceRecord], year: i32, month: u32) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return summary;
    }

    for record in records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
    {
        match record.status {
            DayStatus::Present => summary.days_present += 1,
            DayStatus::HalfDay => summary.half_days += 1,
            DayStatus::Leave => summary.leave_days += 1,
            DayStatus::Absent => summary.absent_days += 1,
            DayStatus::Pending => summary.pending_days += 1,
        }

        let times = compute_worked_and_overtime(record.check_in_time, record.check_out_time);
        summary.worked_minutes += times.worked.minutes();
        summary.overtime_minutes += times.overtime.minutes();
    }

    summary.total_working_days = summary.days_present + summary.half_days + summary.leave_days;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap())
    }

    fn record(day: &str, status: DayStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            check_in_time: None,
            check_out_time: None,
            status,
            employee_profile_id: 4,
            notes: None,
        }
    }

    fn worked(day: &str, check_in: &str, check_out: &str) -> AttendanceRecord {
        AttendanceRecord {
            check_in_time: at(&format!("{} {}", day, check_in)),
            check_out_time: at(&format!("{} {}", day, check_out)),
            ..record(day, DayStatus::Present)
        }
    }

    // ==========================================================================
    // Day counts
    // ==========================================================================

    #[test]
    fn test_counts_each_status() {
        let records = vec![
            record("2026-01-05", DayStatus::Present),
            record("2026-01-06", DayStatus::Present),
            record("2026-01-07", DayStatus::HalfDay),
            record("2026-01-08", DayStatus::Leave),
            record("2026-01-09", DayStatus::Absent),
            record("2026-01-12", DayStatus::Pending),
        ];

        let summary = summarize_month(&records, 2026, 1);
        assert_eq!(summary.days_present, 2);
        assert_eq!(summary.half_days, 1);
        assert_eq!(summary.leave_days, 1);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.pending_days, 1);
        assert_eq!(summary.total_working_days, 4);
    }

    #[test]
    fn test_ignores_records_outside_month() {
        let records = vec![
            record("2025-12-31", DayStatus::Present),
            record("2026-01-15", DayStatus::Present),
            record("2026-02-01", DayStatus::Present),
            record("2025-01-15", DayStatus::Present),
        ];

        let summary = summarize_month(&records, 2026, 1);
        assert_eq!(summary.days_present, 1);
        assert_eq!(summary.total_working_days, 1);
    }

    #[test]
    fn test_invalid_month_is_empty() {
        let records = vec![record("2026-01-15", DayStatus::Present)];
        assert_eq!(summarize_month(&records, 2026, 13), AttendanceSummary::default());
        assert_eq!(summarize_month(&records, 2026, 0), AttendanceSummary::default());
    }

    #[test]
    fn test_no_records_is_empty() {
        assert_eq!(summarize_month(&[], 2026, 1), AttendanceSummary::default());
    }

    // ==========================================================================
    // Time totals
    // ==========================================================================

    #[test]
    fn test_sums_worked_and_overtime() {
        let records = vec![
            worked("2026-01-05", "09:00:00", "18:30:00"),
            worked("2026-01-06", "09:00:00", "17:00:00"),
            worked("2026-01-07", "09:00:00", "19:00:00"),
        ];

        let summary = summarize_month(&records, 2026, 1);
        assert_eq!(summary.worked_minutes, 570 + 480 + 600);
        assert_eq!(summary.overtime_minutes, 90 + 120);
        assert_eq!(summary.worked().to_string(), "27:30");
        assert_eq!(summary.overtime().to_string(), "03:30");
    }

    #[test]
    fn test_open_days_add_no_time() {
        let mut open = record("2026-01-05", DayStatus::Present);
        open.check_in_time = at("2026-01-05 09:00:00");

        let summary = summarize_month(&[open], 2026, 1);
        assert_eq!(summary.days_present, 1);
        assert_eq!(summary.worked_minutes, 0);
        assert_eq!(summary.overtime_minutes, 0);
    }

    #[test]
    fn test_serializes_counts() {
        let summary = summarize_month(&[record("2026-01-05", DayStatus::Leave)], 2026, 1);
        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(json["leave_days"], 1);
        assert_eq!(json["total_working_days"], 1);
    }
}
