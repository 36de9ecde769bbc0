//! Error types for the HRMS engine.
//!
//! The salary calculator and the attendance resolver never fail: they coerce
//! bad input to zero instead. The errors below cover the parts of the engine
//! that are allowed to reject data, namely policy configuration loading and
//! the leave request rules.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the HRMS engine.
///
/// # Example
///
/// ```
/// use hrms_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The policy configuration parsed but holds a value the engine cannot use.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave application was malformed (for example, reversed dates).
    #[error("Invalid leave request: {message}")]
    InvalidLeaveRequest {
        /// A description of what made the request invalid.
        message: String,
    },

    /// The employee does not have enough leave left for the request.
    #[error(
        "Insufficient {leave_type} leave balance: requested {requested} days, {remaining} remaining"
    )]
    InsufficientLeaveBalance {
        /// The leave type of the request.
        leave_type: String,
        /// The number of days requested.
        requested: Decimal,
        /// The number of days remaining (zero when no balance exists).
        remaining: Decimal,
    },

    /// A leave request was asked to move out of a status that does not allow it.
    #[error("Cannot {action} leave request in status '{status}': only pending requests can be changed")]
    InvalidLeaveTransition {
        /// The attempted action (approve, reject, cancel).
        action: String,
        /// The current status of the request.
        status: String,
    },

    /// An employee tried to act on a leave request they do not own.
    #[error(
        "Employee profile {employee_profile_id} cannot change a leave request owned by profile {owner_profile_id}"
    )]
    LeaveNotOwned {
        /// The employee profile that attempted the action.
        employee_profile_id: i64,
        /// The employee profile that owns the request.
        owner_profile_id: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
