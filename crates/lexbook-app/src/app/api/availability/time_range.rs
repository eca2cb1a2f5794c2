use lexbook_schedule::validate_time_range;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use super::render_error;

/// ## Summary
/// Time range check request payload
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TimeRangeRequest {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// ## Summary
/// Time range check response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct TimeRangeResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// ## Summary
/// POST /api/availability/time-range - Check that start is before end
///
/// An invalid range is reported in the body with HTTP 200.
///
/// ## Errors
/// Returns HTTP 400 if the body is not JSON.
#[handler]
async fn time_range_handler(req: &mut Request, res: &mut Response) {
    let body: TimeRangeRequest = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse time range request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let check = validate_time_range(body.start_time.as_deref(), body.end_time.as_deref());
    res.render(Json(TimeRangeResponse {
        valid: check.is_valid(),
        message: check.message(),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("time-range").post(time_range_handler)
}
