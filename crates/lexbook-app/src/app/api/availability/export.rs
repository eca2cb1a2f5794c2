use lexbook_schedule::export::{CalendarExport, export_slot};
use lexbook_schedule::rule::DEFAULT_MAX_DATES;
use lexbook_schedule::time::parse_time;
use lexbook_schedule::{DayOfWeek, RepeatInput};
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use super::{render_app_error, render_error};
use crate::error::AppResult;
use crate::schedule_handler::{ScheduleContext, get_schedule_from_depot};

/// Largest number of dates listed alongside an exported rule.
const MAX_EXPORT_DATES: usize = 366;

/// ## Summary
/// Calendar export request payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRequest {
    pub day_of_week: String,
    pub start_time: String,
    #[serde(flatten)]
    pub repeat: RepeatInput,
    #[serde(default)]
    pub max_dates: Option<usize>,
}

fn build_export(body: &ExportRequest, schedule: &ScheduleContext) -> AppResult<CalendarExport> {
    let day: DayOfWeek = body.day_of_week.parse()?;
    let start = parse_time(&body.start_time)?;
    let rule = body.repeat.parse_rule()?;
    let max_dates = body
        .max_dates
        .filter(|max| *max > 0)
        .unwrap_or(DEFAULT_MAX_DATES)
        .min(MAX_EXPORT_DATES);

    Ok(export_slot(day, rule, start, schedule.today(), max_dates)?)
}

/// ## Summary
/// POST /api/availability/export - Describe a weekly slot as an RFC 5545 `RRULE`
///
/// Unlike the preview, input is decoded strictly.
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed, the weekday or start time is
/// unknown, the repeat value cannot be decoded, or the end date precedes the
/// first occurrence.
#[handler]
async fn export_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: ExportRequest = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse export request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let result = get_schedule_from_depot(depot).and_then(|schedule| build_export(&body, &schedule));
    match result {
        Ok(export) => {
            tracing::debug!(rrule = %export.rrule, dtstart = %export.dtstart, "Exported weekly slot");
            res.render(Json(export));
        }
        Err(e) => render_app_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("export").post(export_handler)
}
