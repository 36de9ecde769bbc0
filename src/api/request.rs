//! Request types for the HRMS engine API.
//!
//! Salary endpoints take domain types directly (`WageConfiguration`,
//! `SalaryStructureRecord`). The structures below wrap the inputs of the
//! remaining endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, LeaveApplication, LeaveBalance, LeaveRequest, lenient};

/// Request body for `POST /salary/template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryTemplateRequest {
    /// The wage to lay the policy defaults over. Invalid input becomes zero.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_wage: Decimal,
}

/// Request body for `POST /attendance/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusRequest {
    /// Recent records for one employee, in any order.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// The caller's current calendar date.
    pub today: NaiveDate,
}

/// Request body for `POST /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// Records for one employee; records outside the month are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

/// Request body for `POST /leave/apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplyRequest {
    /// The application being filed.
    pub application: LeaveApplication,
    /// The employee's balance for the leave type and start year, if any.
    #[serde(default)]
    pub balance: Option<LeaveBalance>,
}

/// Request body for `POST /leave/approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApproveRequest {
    /// The pending request.
    pub request: LeaveRequest,
    /// The balance the request draws from; ignored for unpaid leave.
    #[serde(default)]
    pub balance: Option<LeaveBalance>,
    /// The approving user.
    pub approver_id: i64,
    /// Approval time; the server's UTC clock when omitted.
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
}

/// Request body for `POST /leave/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRejectRequest {
    /// The pending request.
    pub request: LeaveRequest,
    /// The rejecting user.
    pub approver_id: i64,
    /// Rejection time; the server's UTC clock when omitted.
    #[serde(default)]
    pub rejected_at: Option<NaiveDateTime>,
    /// Comments for the employee.
    #[serde(default)]
    pub comments: Option<String>,
}

/// Request body for `POST /leave/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveCancelRequest {
    /// The pending request.
    pub request: LeaveRequest,
    /// The employee asking to cancel.
    pub employee_profile_id: i64,
}
