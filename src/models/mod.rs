//! Core data models for the HRMS engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod leave;
pub(crate) mod lenient;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceStatus, DayStatus};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, SalaryCalculationResult};
pub use leave::{LeaveApplication, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
pub use lenient::{non_negative, parse_amount, parse_timestamp};
pub use salary::{SalaryStructure, SalaryStructureRecord, WageConfiguration};
