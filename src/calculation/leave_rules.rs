//! Leave request rules.
//!
//! Requests start out pending and can move exactly once, to approved,
//! rejected or cancelled. Paid and sick leave draw from the employee's
//! balance for the year the leave starts in; unpaid leave never touches a
//! balance. Every function takes the current values and returns updated
//! copies, leaving persistence to the caller.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveApplication, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};

/// An approved request together with the balance it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApproval {
    /// The request, now approved.
    pub request: LeaveRequest,
    /// The updated balance; `None` for unpaid leave.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<LeaveBalance>,
}

/// Counts the calendar days from `start` to `end`, both inclusive.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::count_leave_days;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
///
/// assert_eq!(count_leave_days(start, end).unwrap(), Decimal::new(5, 0));
/// assert!(count_leave_days(end, start).is_err());
/// ```
pub fn count_leave_days(start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal> {
    if start > end {
        return Err(EngineError::InvalidLeaveRequest {
            message: format!("start date {} is after end date {}", start, end),
        });
    }

    let days = (end - start).num_days() + 1;
    Ok(Decimal::from(days))
}

fn ensure_pending(request: &LeaveRequest, action: &str) -> EngineResult<()> {
    if request.status == LeaveStatus::Pending {
        return Ok(());
    }
    Err(EngineError::InvalidLeaveTransition {
        action: action.to_string(),
        status: request.status.as_str().to_string(),
    })
}

/// Returns the balance a request must draw from, checked for enough days.
fn matching_balance<'a>(
    employee_profile_id: i64,
    leave_type: LeaveType,
    start_date: NaiveDate,
    requested: Decimal,
    balance: Option<&'a LeaveBalance>,
) -> EngineResult<&'a LeaveBalance> {
    let balance =
        balance.filter(|b| b.covers(employee_profile_id, leave_type, start_date.year()));

    match balance {
        Some(balance) if balance.remaining_days >= requested => Ok(balance),
        other => Err(EngineError::InsufficientLeaveBalance {
            leave_type: leave_type.as_str().to_string(),
            requested,
            remaining: other.map_or(Decimal::ZERO, |b| b.remaining_days),
        }),
    }
}

/// Validates an application and turns it into a pending request.
///
/// Paid and sick leave need a balance for the same employee, type and
/// start year with at least as many remaining days as the request covers.
/// A balance that does not match counts as no balance.
pub fn apply_for_leave(
    application: &LeaveApplication,
    balance: Option<&LeaveBalance>,
) -> EngineResult<LeaveRequest> {
    let total_days = count_leave_days(application.start_date, application.end_date)?;

    if application.leave_type.uses_balance() {
        matching_balance(
            application.employee_profile_id,
            application.leave_type,
            application.start_date,
            total_days,
            balance,
        )?;
    }

    info!(
        employee_profile_id = application.employee_profile_id,
        leave_type = application.leave_type.as_str(),
        %total_days,
        "Leave application accepted"
    );

    Ok(LeaveRequest {
        id: None,
        employee_profile_id: application.employee_profile_id,
        leave_type: application.leave_type,
        start_date: application.start_date,
        end_date: application.end_date,
        total_days,
        reason: application.reason.clone(),
        status: LeaveStatus::Pending,
        approver_id: None,
        approved_at: None,
        comments: None,
    })
}

/// Recounts a request's days from its dates and checks the stored total.
fn verified_days(request: &LeaveRequest) -> EngineResult<Decimal> {
    let total_days = count_leave_days(request.start_date, request.end_date)?;
    if request.total_days != total_days {
        return Err(EngineError::InvalidLeaveRequest {
            message: format!(
                "total days {} does not match {} days from {} to {}",
                request.total_days, total_days, request.start_date, request.end_date
            ),
        });
    }
    Ok(total_days)
}

/// Approves a pending request and deducts it from the balance.
///
/// The day count is recomputed from the request's dates and must match its
/// stored total. The balance is checked again, since other requests may
/// have been approved after this one was filed.
pub fn approve_leave(
    request: &LeaveRequest,
    balance: Option<&LeaveBalance>,
    approver_id: i64,
    at: NaiveDateTime,
) -> EngineResult<LeaveApproval> {
    ensure_pending(request, "approve")?;
    let total_days = verified_days(request)?;

    let balance = if request.leave_type.uses_balance() {
        let current = matching_balance(
            request.employee_profile_id,
            request.leave_type,
            request.start_date,
            total_days,
            balance,
        )?;

        let mut updated = current.clone();
        updated.used_days += total_days;
        updated.remaining_days -= total_days;
        debug!(
            employee_profile_id = request.employee_profile_id,
            remaining_days = %updated.remaining_days,
            "Leave balance deducted"
        );
        Some(updated)
    } else {
        None
    };

    let mut approved = request.clone();
    approved.status = LeaveStatus::Approved;
    approved.approver_id = Some(approver_id);
    approved.approved_at = Some(at);

    info!(
        leave_id = ?request.id,
        approver_id,
        %total_days,
        "Leave request approved"
    );

    Ok(LeaveApproval {
        request: approved,
        balance,
    })
}

/// Rejects a pending request, recording the approver and any comments.
pub fn reject_leave(
    request: &LeaveRequest,
    approver_id: i64,
    at: NaiveDateTime,
    comments: Option<&str>,
) -> EngineResult<LeaveRequest> {
    ensure_pending(request, "reject")?;

    let mut rejected = request.clone();
    rejected.status = LeaveStatus::Rejected;
    rejected.approver_id = Some(approver_id);
    rejected.approved_at = Some(at);
    if let Some(comments) = comments {
        rejected.comments = Some(comments.to_string());
    }

    info!(leave_id = ?request.id, approver_id, "Leave request rejected");
    Ok(rejected)
}

/// Cancels a pending request on behalf of the employee who filed it.
pub fn cancel_leave(request: &LeaveRequest, employee_profile_id: i64) -> EngineResult<LeaveRequest> {
    if request.employee_profile_id != employee_profile_id {
        return Err(EngineError::LeaveNotOwned {
            employee_profile_id,
            owner_profile_id: request.employee_profile_id,
        });
    }
    ensure_pending(request, "cancel")?;

    let mut cancelled = request.clone();
    cancelled.status = LeaveStatus::Cancelled;

    info!(leave_id = ?request.id, employee_profile_id, "Leave request cancelled");
    Ok(cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn noon(s: &str) -> NaiveDateTime {
        date(s).and_hms_opt(12, 0, 0).unwrap()
    }

    fn application(leave_type: LeaveType, start: &str, end: &str) -> LeaveApplication {
        LeaveApplication {
            employee_profile_id: 4,
            leave_type,
            start_date: date(start),
            end_date: date(end),
            reason: Some("family trip".to_string()),
        }
    }

    fn balance(leave_type: LeaveType, remaining: &str) -> LeaveBalance {
        LeaveBalance {
            id: Some(1),
            employee_profile_id: 4,
            leave_type,
            year: 2026,
            total_days: dec("24"),
            used_days: dec("24") - dec(remaining),
            remaining_days: dec(remaining),
        }
    }

    fn pending_request(leave_type: LeaveType) -> LeaveRequest {
        let mut request = apply_for_leave(
            &application(leave_type, "2026-03-02", "2026-03-06"),
            Some(&balance(leave_type, "24")),
        )
        .unwrap();
        request.id = Some(10);
        request
    }

    // ==========================================================================
    // Day counting
    // ==========================================================================

    #[test]
    fn test_count_working_week() {
        assert_eq!(
            count_leave_days(date("2026-03-02"), date("2026-03-06")).unwrap(),
            dec("5")
        );
    }

    #[test]
    fn test_count_single_day() {
        assert_eq!(
            count_leave_days(date("2026-03-02"), date("2026-03-02")).unwrap(),
            dec("1")
        );
    }

    #[test]
    fn test_count_includes_weekends_and_month_boundaries() {
        assert_eq!(
            count_leave_days(date("2026-02-27"), date("2026-03-02")).unwrap(),
            dec("4")
        );
    }

    #[test]
    fn test_count_reversed_dates_fails() {
        let result = count_leave_days(date("2026-03-06"), date("2026-03-02"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidLeaveRequest { .. })
        ));
    }

    // ==========================================================================
    // Applying
    // ==========================================================================

    #[test]
    fn test_apply_creates_pending_request() {
        let request = apply_for_leave(
            &application(LeaveType::Paid, "2026-03-02", "2026-03-06"),
            Some(&balance(LeaveType::Paid, "10")),
        )
        .unwrap();

        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.total_days, dec("5"));
        assert_eq!(request.reason.as_deref(), Some("family trip"));
        assert!(request.approver_id.is_none());
    }

    #[test]
    fn test_apply_with_exact_balance_succeeds() {
        let result = apply_for_leave(
            &application(LeaveType::Sick, "2026-03-02", "2026-03-06"),
            Some(&balance(LeaveType::Sick, "5")),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_apply_with_short_balance_fails() {
        let result = apply_for_leave(
            &application(LeaveType::Paid, "2026-03-02", "2026-03-06"),
            Some(&balance(LeaveType::Paid, "3")),
        );

        match result {
            Err(EngineError::InsufficientLeaveBalance {
                leave_type,
                requested,
                remaining,
            }) => {
                assert_eq!(leave_type, "paid");
                assert_eq!(requested, dec("5"));
                assert_eq!(remaining, dec("3"));
            }
            other => panic!("expected insufficient balance, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_without_balance_fails() {
        let result = apply_for_leave(&application(LeaveType::Paid, "2026-03-02", "2026-03-02"), None);
        assert!(matches!(
            result,
            Err(EngineError::InsufficientLeaveBalance { remaining, .. }) if remaining == Decimal::ZERO
        ));
    }

    #[test]
    fn test_apply_with_other_type_balance_fails() {
        let result = apply_for_leave(
            &application(LeaveType::Sick, "2026-03-02", "2026-03-02"),
            Some(&balance(LeaveType::Paid, "10")),
        );
        assert!(matches!(
            result,
            Err(EngineError::InsufficientLeaveBalance { .. })
        ));
    }

    #[test]
    fn test_apply_uses_start_year_balance() {
        let result = apply_for_leave(
            &application(LeaveType::Paid, "2025-12-30", "2026-01-02"),
            Some(&balance(LeaveType::Paid, "10")),
        );
        assert!(matches!(
            result,
            Err(EngineError::InsufficientLeaveBalance { .. })
        ));
    }

    #[test]
    fn test_apply_unpaid_skips_balance() {
        let request = apply_for_leave(&application(LeaveType::Unpaid, "2026-03-02", "2026-03-06"), None)
            .unwrap();
        assert_eq!(request.total_days, dec("5"));
        assert_eq!(request.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_apply_reversed_dates_fails_before_balance_check() {
        let result = apply_for_leave(&application(LeaveType::Paid, "2026-03-06", "2026-03-02"), None);
        assert!(matches!(
            result,
            Err(EngineError::InvalidLeaveRequest { .. })
        ));
    }

    // ==========================================================================
    // Approving
    // ==========================================================================

    #[test]
    fn test_approve_moves_days_from_remaining_to_used() {
        let request = pending_request(LeaveType::Paid);
        let approval = approve_leave(
            &request,
            Some(&balance(LeaveType::Paid, "12")),
            99,
            noon("2026-02-20"),
        )
        .unwrap();

        assert_eq!(approval.request.status, LeaveStatus::Approved);
        assert_eq!(approval.request.approver_id, Some(99));
        assert_eq!(approval.request.approved_at, Some(noon("2026-02-20")));

        let updated = approval.balance.unwrap();
        assert_eq!(updated.remaining_days, dec("7"));
        assert_eq!(updated.used_days, dec("17"));
        assert_eq!(updated.total_days, dec("24"));
    }

    #[test]
    fn test_approve_rechecks_balance() {
        let request = pending_request(LeaveType::Paid);
        let result = approve_leave(
            &request,
            Some(&balance(LeaveType::Paid, "2")),
            99,
            noon("2026-02-20"),
        );
        assert!(matches!(
            result,
            Err(EngineError::InsufficientLeaveBalance { .. })
        ));
    }

    #[test]
    fn test_approve_rejects_negative_total_days() {
        let mut request = pending_request(LeaveType::Paid);
        request.total_days = dec("-10");

        let result = approve_leave(
            &request,
            Some(&balance(LeaveType::Paid, "5")),
            99,
            noon("2026-02-20"),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidLeaveRequest { .. })
        ));
    }

    #[test]
    fn test_approve_rejects_total_days_not_matching_dates() {
        let mut request = pending_request(LeaveType::Unpaid);
        request.total_days = dec("2");

        let result = approve_leave(&request, None, 99, noon("2026-02-20"));
        match result {
            Err(EngineError::InvalidLeaveRequest { message }) => {
                assert!(message.contains("does not match 5 days"));
            }
            other => panic!("expected invalid request, got {:?}", other),
        }
    }

    #[test]
    fn test_approve_rejects_reversed_dates() {
        let mut request = pending_request(LeaveType::Paid);
        request.end_date = date("2026-03-01");

        let result = approve_leave(
            &request,
            Some(&balance(LeaveType::Paid, "24")),
            99,
            noon("2026-02-20"),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidLeaveRequest { .. })
        ));
    }

    #[test]
    fn test_approve_unpaid_returns_no_balance() {
        let request = pending_request(LeaveType::Unpaid);
        let approval = approve_leave(&request, None, 99, noon("2026-02-20")).unwrap();

        assert_eq!(approval.request.status, LeaveStatus::Approved);
        assert!(approval.balance.is_none());
    }

    #[test]
    fn test_approve_only_pending() {
        let mut request = pending_request(LeaveType::Paid);
        request.status = LeaveStatus::Rejected;

        let result = approve_leave(
            &request,
            Some(&balance(LeaveType::Paid, "24")),
            99,
            noon("2026-02-20"),
        );
        match result {
            Err(EngineError::InvalidLeaveTransition { action, status }) => {
                assert_eq!(action, "approve");
                assert_eq!(status, "rejected");
            }
            other => panic!("expected invalid transition, got {:?}", other),
        }
    }

    // ==========================================================================
    // Rejecting
    // ==========================================================================

    #[test]
    fn test_reject_records_comments() {
        let request = pending_request(LeaveType::Sick);
        let rejected = reject_leave(&request, 99, noon("2026-02-20"), Some("team offsite")).unwrap();

        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.approver_id, Some(99));
        assert_eq!(rejected.comments.as_deref(), Some("team offsite"));
    }

    #[test]
    fn test_reject_without_comments_keeps_existing() {
        let mut request = pending_request(LeaveType::Sick);
        request.comments = Some("earlier note".to_string());

        let rejected = reject_leave(&request, 99, noon("2026-02-20"), None).unwrap();
        assert_eq!(rejected.comments.as_deref(), Some("earlier note"));
    }

    #[test]
    fn test_reject_approved_request_fails() {
        let mut request = pending_request(LeaveType::Sick);
        request.status = LeaveStatus::Approved;

        assert!(matches!(
            reject_leave(&request, 99, noon("2026-02-20"), None),
            Err(EngineError::InvalidLeaveTransition { .. })
        ));
    }

    // ==========================================================================
    // Cancelling
    // ==========================================================================

    #[test]
    fn test_cancel_by_owner() {
        let request = pending_request(LeaveType::Paid);
        let cancelled = cancel_leave(&request, 4).unwrap();

        assert_eq!(cancelled.status, LeaveStatus::Cancelled);
        assert!(cancelled.approver_id.is_none());
    }

    #[test]
    fn test_cancel_by_other_employee_fails() {
        let request = pending_request(LeaveType::Paid);
        match cancel_leave(&request, 7) {
            Err(EngineError::LeaveNotOwned {
                employee_profile_id,
                owner_profile_id,
            }) => {
                assert_eq!(employee_profile_id, 7);
                assert_eq!(owner_profile_id, 4);
            }
            other => panic!("expected not owned, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_twice_fails() {
        let request = pending_request(LeaveType::Paid);
        let cancelled = cancel_leave(&request, 4).unwrap();

        assert!(matches!(
            cancel_leave(&cancelled, 4),
            Err(EngineError::InvalidLeaveTransition { .. })
        ));
    }
}
