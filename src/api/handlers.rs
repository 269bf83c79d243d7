//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compose_payroll, month_window};
use crate::error::{PayrollError, PayrollResult};
use crate::render::{render_payslip, RenderedDocument};

use super::request::{DocumentQuery, RunPayrollRequest};
use super::response::{ApiError, ApiErrorResponse, RunPayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/run", post(run_payroll_handler))
        .route("/payslips/:id/document", get(payslip_document_handler))
        .with_state(state)
}

/// Handler for the `POST /payroll/run` endpoint.
///
/// Computes and persists a payroll run + payslip pair for one employee and
/// month, returning the identifiers and the computed summary.
async fn run_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<RunPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_payroll_run(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.employee_id,
                payroll_run_id = %response.payroll_run_id,
                net_pay = %response.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll run completed"
            );
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Payroll run failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Performs one payroll run against the repository.
///
/// Loads the employee, salary structure, holidays, overlapping leave, and a
/// rule snapshot, composes the run, and persists the pair atomically. The
/// rule snapshot is taken once here; concurrent rule edits cannot affect an
/// in-flight computation.
fn perform_payroll_run(
    state: &AppState,
    request: &RunPayrollRequest,
) -> PayrollResult<RunPayrollResponse> {
    let repo = state.repo();

    let (month_start, month_end) = month_window(request.year, request.month)?;

    let rounding = request
        .rounding
        .unwrap_or(state.config().defaults.rounding);

    let employee = repo.employee(&request.employee_id)?;
    let structure = repo.salary_structure(&request.employee_id)?;
    let holidays = repo.holidays()?;
    let leaves = repo.leaves_overlapping(&request.employee_id, month_start, month_end)?;
    let rules = repo.pay_rules()?;

    let outcome = compose_payroll(
        &employee,
        &structure,
        &holidays,
        &leaves,
        &rules,
        request.year,
        request.month,
        rounding,
        &request.actor_id,
    )?;

    let response = RunPayrollResponse::from_records(&outcome.run, &outcome.payslip);
    repo.insert_run_and_payslip(outcome.run, outcome.payslip)?;
    Ok(response)
}

/// Handler for the `GET /payslips/{id}/document` endpoint.
///
/// Streams the rendered payslip PDF. An optional `remark` query parameter
/// is attached to the payslip before rendering (last write wins).
async fn payslip_document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DocumentQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match generate_payslip_document(&state, &id, query.remark) {
        Ok(document) => {
            info!(
                correlation_id = %correlation_id,
                payslip_id = %id,
                filename = %document.filename,
                bytes = document.bytes.len(),
                "Payslip document rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", document.filename),
                    ),
                ],
                document.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                payslip_id = %id,
                error = %err,
                "Payslip rendering failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Renders the payslip document for download.
///
/// Read-only apart from the optional remark update; all monetary figures
/// come from the persisted snapshot.
fn generate_payslip_document(
    state: &AppState,
    payslip_id: &str,
    remark: Option<String>,
) -> PayrollResult<RenderedDocument> {
    let id = Uuid::parse_str(payslip_id)
        .map_err(|_| PayrollError::invalid("payslip_id", "must be a UUID"))?;
    let repo = state.repo();

    if let Some(remark) = remark {
        repo.set_payslip_remark(id, Some(remark))?;
    }

    let payslip = repo.payslip(id)?;
    let run = repo.payroll_run(payslip.payroll_run_id)?;
    let employee = repo.employee(&payslip.employee_id)?;

    render_payslip(&state.config().issuer, &employee, &run, &payslip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{
        PayRule, RuleBase, RuleCategory, RuleKind, SalaryComponents, SalaryStructure,
    };
    use crate::models::EmployeeProfile;
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn seeded_state() -> AppState {
        let store = InMemoryStore::new();
        store
            .seed_employee(
                EmployeeProfile {
                    id: "emp_001".to_string(),
                    name: "Asha Verma".to_string(),
                    department: "Engineering".to_string(),
                    designation: "Senior Developer".to_string(),
                    code: "EMP-0042".to_string(),
                    bank_account: "XXXX-4821".to_string(),
                },
                SalaryStructure::from_components(
                    "emp_001",
                    SalaryComponents {
                        basic: dec("30000"),
                        hra: dec("12000"),
                        conveyance: dec("0"),
                        special_allowance: dec("5000"),
                        meal_allowance: dec("0"),
                    },
                    "INR",
                    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                ),
            )
            .unwrap();
        store
            .seed_rule(PayRule {
                name: "Provident Fund".to_string(),
                category: RuleCategory::Deduction,
                kind: RuleKind::Percentage,
                base: RuleBase::Basic,
                value: dec("12"),
                is_taxable: false,
                priority: 1,
                active: true,
            })
            .unwrap();
        AppState::new(EngineConfig::sample(), Arc::new(store))
    }

    fn run_request() -> RunPayrollRequest {
        RunPayrollRequest {
            employee_id: "emp_001".to_string(),
            month: 3,
            year: 2025,
            actor_id: "admin_01".to_string(),
            rounding: None,
        }
    }

    #[test]
    fn test_perform_payroll_run_persists_pair() {
        let state = seeded_state();
        let response = perform_payroll_run(&state, &run_request()).unwrap();

        assert_eq!(response.gross_before_deductions, dec("47000.00"));
        assert_eq!(response.total_deductions, dec("3600.00"));
        assert_eq!(response.net_pay, dec("43400"));

        let run = state.repo().payroll_run(response.payroll_run_id).unwrap();
        assert_eq!(run.net_pay, dec("43400"));
        let payslip = state.repo().payslip(response.payslip_id).unwrap();
        assert_eq!(payslip.payroll_run_id, run.id);
    }

    #[test]
    fn test_second_run_is_rejected_without_new_records() {
        let state = seeded_state();
        perform_payroll_run(&state, &run_request()).unwrap();
        let err = perform_payroll_run(&state, &run_request()).unwrap_err();
        assert!(matches!(err, PayrollError::AlreadyProcessed { .. }));
    }

    #[test]
    fn test_unknown_employee_fails_not_found() {
        let state = seeded_state();
        let mut request = run_request();
        request.employee_id = "ghost".to_string();
        let err = perform_payroll_run(&state, &request).unwrap_err();
        assert!(matches!(err, PayrollError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_generate_document_rejects_malformed_id() {
        let state = seeded_state();
        let err = generate_payslip_document(&state, "not-a-uuid", None).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidArgument { .. }));
    }

    #[test]
    fn test_generate_document_attaches_remark() {
        let state = seeded_state();
        let response = perform_payroll_run(&state, &run_request()).unwrap();

        let document = generate_payslip_document(
            &state,
            &response.payslip_id.to_string(),
            Some("Final settlement".to_string()),
        )
        .unwrap();

        assert!(document.bytes.starts_with(b"%PDF-1.4"));
        assert_eq!(document.filename, "Asha_Verma_Salary_Slip_March.pdf");
        assert_eq!(
            state
                .repo()
                .payslip(response.payslip_id)
                .unwrap()
                .remark
                .as_deref(),
            Some("Final settlement")
        );
    }
}
