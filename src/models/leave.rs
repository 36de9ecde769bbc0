//! Leave request and leave balance models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of time off requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid time off, drawn from a balance.
    Paid,
    /// Sick leave, drawn from a balance.
    Sick,
    /// Unpaid leave; no balance is consulted.
    Unpaid,
}

impl LeaveType {
    /// The wire label for this leave type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Paid => "paid",
            LeaveType::Sick => "sick",
            LeaveType::Unpaid => "unpaid",
        }
    }

    /// Returns true if requests of this type consume a leave balance.
    pub fn uses_balance(&self) -> bool {
        !matches!(self, LeaveType::Unpaid)
    }
}

/// Where a leave request is in its approval lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting an HR decision.
    #[default]
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

impl LeaveStatus {
    /// The wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        }
    }
}

/// What an employee submits when applying for leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The applying employee.
    pub employee_profile_id: i64,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Optional reason shown to the approver.
    #[serde(default)]
    pub reason: Option<String>,
}

/// A leave request and its approval state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Backend identifier; absent until the request is stored.
    #[serde(default)]
    pub id: Option<i64>,
    /// The requesting employee.
    pub employee_profile_id: i64,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of days the request covers.
    pub total_days: Decimal,
    /// Optional reason shown to the approver.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: LeaveStatus,
    /// User who approved or rejected the request.
    #[serde(default)]
    pub approver_id: Option<i64>,
    /// When the request was approved or rejected.
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    /// Approver comments.
    #[serde(default)]
    pub comments: Option<String>,
}

/// An employee's allowance for one leave type in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Backend identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// The employee the balance belongs to.
    pub employee_profile_id: i64,
    /// The leave type this balance covers.
    pub leave_type: LeaveType,
    /// The calendar year this balance covers.
    pub year: i32,
    /// Days granted for the year.
    pub total_days: Decimal,
    /// Days already taken.
    #[serde(default)]
    pub used_days: Decimal,
    /// Days still available.
    pub remaining_days: Decimal,
}

impl LeaveBalance {
    /// Returns true if this balance is the one a request must draw from.
    pub fn covers(&self, employee_profile_id: i64, leave_type: LeaveType, year: i32) -> bool {
        self.employee_profile_id == employee_profile_id
            && self.leave_type == leave_type
            && self.year == year
    }
}
