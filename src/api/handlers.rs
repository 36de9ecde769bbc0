//! HTTP request handlers for the HRMS engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_for_leave, approve_leave, cancel_leave, compute_worked_and_overtime,
    derive_configuration, explain_structure, reject_leave, resolve_today, round_for_display,
    summarize_month,
};
use crate::error::EngineError;
use crate::models::{
    AuditTrace, SalaryCalculationResult, SalaryStructure, SalaryStructureRecord,
    WageConfiguration,
};

use super::request::{
    AttendanceStatusRequest, AttendanceSummaryRequest, LeaveApplyRequest, LeaveApproveRequest,
    LeaveCancelRequest, LeaveRejectRequest, SalaryTemplateRequest,
};
use super::response::{ApiError, ApiErrorResponse, AttendanceStatusResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/compute", post(compute_salary_handler))
        .route("/salary/derive", post(derive_salary_handler))
        .route("/salary/template", post(salary_template_handler))
        .route("/attendance/status", post(attendance_status_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .route("/leave/apply", post(leave_apply_handler))
        .route("/leave/approve", post(leave_approve_handler))
        .route("/leave/reject", post(leave_reject_handler))
        .route("/leave/cancel", post(leave_cancel_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON payload, turning extractor rejections into 400 responses.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn engine_failure(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected by engine rules"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Computes a structure and packages it with its audit trace.
fn build_salary_result(config: &WageConfiguration) -> SalaryCalculationResult {
    let start_time = Instant::now();
    let breakdown = explain_structure(config, 1);
    let structure = &breakdown.structure;

    SalaryCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        monthly_wage: structure.monthly_wage,
        components: structure.to_record().map_amounts(round_for_display),
        over_allocation: structure.over_allocation(),
        audit_trace: AuditTrace {
            steps: breakdown.audit_steps,
            warnings: breakdown.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Handler for POST /salary/compute.
///
/// Accepts a wage configuration and returns the component amounts.
async fn compute_salary_handler(
    payload: Result<Json<WageConfiguration>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary compute request");

    let config = match parse_payload(correlation_id, payload) {
        Ok(config) => config,
        Err(rejection) => return rejection.into_response(),
    };

    let result = build_salary_result(&config);
    info!(
        correlation_id = %correlation_id,
        monthly_wage = %result.monthly_wage,
        over_allocation = %result.over_allocation,
        duration_us = result.audit_trace.duration_us,
        "Salary structure computed"
    );
    json_ok(result)
}

/// Handler for POST /salary/derive.
///
/// Accepts a stored structure and returns the percentages that produce it.
async fn derive_salary_handler(
    payload: Result<Json<SalaryStructureRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary derive request");

    let record = match parse_payload(correlation_id, payload) {
        Ok(record) => record,
        Err(rejection) => return rejection.into_response(),
    };

    let configuration = derive_configuration(&SalaryStructure::from(record));
    info!(
        correlation_id = %correlation_id,
        monthly_wage = %configuration.monthly_wage,
        "Salary configuration derived"
    );
    json_ok(configuration)
}

/// Handler for POST /salary/template.
///
/// Lays the policy's default percentages over the given wage.
async fn salary_template_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryTemplateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary template request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let config = state.config().default_configuration(request.monthly_wage);
    let result = build_salary_result(&config);
    info!(
        correlation_id = %correlation_id,
        company = %state.config().company().name,
        monthly_wage = %result.monthly_wage,
        "Salary template computed"
    );
    json_ok(result)
}

/// Handler for POST /attendance/status.
async fn attendance_status_handler(
    payload: Result<Json<AttendanceStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance status request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let today = resolve_today(&request.records, request.today);
    let times = today
        .record
        .map(|r| compute_worked_and_overtime(r.check_in_time, r.check_out_time))
        .unwrap_or_default();

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        status = today.status.as_str(),
        "Attendance status resolved"
    );
    json_ok(AttendanceStatusResponse {
        status: today.status,
        today_record: today.record.cloned(),
        worked: times.worked_display(),
        overtime: times.overtime_display(),
    })
}

/// Handler for POST /attendance/summary.
async fn attendance_summary_handler(
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let summary = summarize_month(&request.records, request.year, request.month);
    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        total_working_days = summary.total_working_days,
        "Attendance summary computed"
    );
    json_ok(summary)
}

/// Handler for POST /leave/apply.
async fn leave_apply_handler(payload: Result<Json<LeaveApplyRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave application");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match apply_for_leave(&request.application, request.balance.as_ref()) {
        Ok(leave) => json_ok(leave),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /leave/approve.
async fn leave_approve_handler(
    payload: Result<Json<LeaveApproveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave approval");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let approved_at = request.approved_at.unwrap_or_else(now);
    match approve_leave(
        &request.request,
        request.balance.as_ref(),
        request.approver_id,
        approved_at,
    ) {
        Ok(approval) => json_ok(approval),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /leave/reject.
async fn leave_reject_handler(
    payload: Result<Json<LeaveRejectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave rejection");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let rejected_at = request.rejected_at.unwrap_or_else(now);
    match reject_leave(
        &request.request,
        request.approver_id,
        rejected_at,
        request.comments.as_deref(),
    ) {
        Ok(leave) => json_ok(leave),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /leave/cancel.
async fn leave_cancel_handler(
    payload: Result<Json<LeaveCancelRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave cancellation");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match cancel_leave(&request.request, request.employee_profile_id) {
        Ok(leave) => json_ok(leave),
        Err(err) => engine_failure(correlation_id, err),
    }
}
