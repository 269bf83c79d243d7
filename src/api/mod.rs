//! HTTP API for the payroll engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DocumentQuery, RunPayrollRequest};
pub use response::{ApiError, ApiErrorResponse, RunPayrollResponse};
pub use state::AppState;
