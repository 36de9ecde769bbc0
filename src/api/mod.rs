//! HTTP API module for the HRMS engine.
//!
//! This module exposes the salary calculator, the attendance resolver and
//! the leave rules as JSON endpoints. The service stores nothing: callers
//! send the records each calculation needs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceStatusRequest, AttendanceSummaryRequest, LeaveApplyRequest, LeaveApproveRequest,
    LeaveCancelRequest, LeaveRejectRequest, SalaryTemplateRequest,
};
pub use response::{ApiError, ApiErrorResponse, AttendanceStatusResponse};
pub use state::AppState;
