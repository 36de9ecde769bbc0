//! Calculation logic for the HRMS engine.
//!
//! This module contains the salary structure calculator (percentages to
//! amounts and back), the attendance status resolver, worked and overtime
//! durations, monthly attendance summaries, and the leave request rules.

mod attendance_status;
mod attendance_summary;
mod leave_rules;
mod salary_structure;
mod worked_hours;

pub use attendance_status::{TodayAttendance, resolve_status, resolve_today};
pub use attendance_summary::{AttendanceSummary, summarize_month};
pub use leave_rules::{
    LeaveApproval, apply_for_leave, approve_leave, cancel_leave, count_leave_days, reject_leave,
};
pub use salary_structure::{
    DEFAULT_BASIC_PERCENT, DEFAULT_HRA_PERCENT, DEFAULT_PF_PERCENT, OVER_ALLOCATED_WARNING,
    SalaryBreakdown, compute_structure, derive_configuration, explain_structure,
    round_for_display,
};
pub use worked_hours::{
    DURATION_PLACEHOLDER, FULL_DAY_THRESHOLD_MINUTES, WorkDuration, WorkedAndOvertime,
    compute_worked_and_overtime,
};
