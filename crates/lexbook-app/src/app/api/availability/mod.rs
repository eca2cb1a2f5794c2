//! Availability wizard endpoints: occurrence preview, time validation, calendar
//! export, and pass-through of slot and exception management to the backend.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Response, Router};
use serde::{Deserialize, Serialize};

use super::AVAILABILITY_ROUTE_COMPONENT;
use crate::error::AppError;

mod branches;
mod exceptions;
mod export;
mod preview;
mod time_range;
mod weekly;

pub use export::ExportRequest;
pub use preview::PreviewRequest;
pub use time_range::{TimeRangeRequest, TimeRangeResponse};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(super) fn render_error(res: &mut Response, status: StatusCode, error: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: error.into(),
    }));
}

pub(super) fn render_app_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, status = status.as_u16(), "Availability request failed");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Availability request rejected");
    }
    render_error(res, status, err.to_string());
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AVAILABILITY_ROUTE_COMPONENT)
        .push(preview::routes())
        .push(time_range::routes())
        .push(export::routes())
        .push(weekly::routes())
        .push(branches::routes())
        .push(exceptions::routes())
}
