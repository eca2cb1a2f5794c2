use lexbook_schedule::RepeatInput;
use lexbook_schedule::rule::DEFAULT_MAX_DATES;
use lexbook_service::availability::preview;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use super::{render_app_error, render_error};
use crate::config::get_config_from_depot;
use crate::schedule_handler::get_schedule_from_depot;

/// Largest preview a single request may ask for.
const MAX_PREVIEW_DATES: usize = 366;

/// ## Summary
/// Preview request payload
///
/// `mode` and `value` are read leniently, exactly as the wizard sends them.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub day_of_week: String,
    #[serde(flatten)]
    pub repeat: RepeatInput,
    #[serde(default)]
    pub max_dates: Option<usize>,
}

/// ## Summary
/// POST /api/availability/preview - List the upcoming dates of a weekly slot
///
/// A zero or missing `max_dates` uses the configured default.
///
/// ## Errors
/// Returns HTTP 400 if the body is not JSON of the expected shape.
/// An unknown weekday is not an error: the response lists no dates.
#[handler]
async fn preview_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let body: PreviewRequest = match req.parse_json().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse preview request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let schedule = match get_schedule_from_depot(depot) {
        Ok(schedule) => schedule,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    let default_max = get_config_from_depot(depot).map_or(DEFAULT_MAX_DATES, |settings| {
        usize::from(settings.schedule.default_max_dates)
    });
    let max_dates = body
        .max_dates
        .filter(|max| *max > 0)
        .unwrap_or(default_max)
        .min(MAX_PREVIEW_DATES);

    let today = schedule.today();
    tracing::debug!(day = %body.day_of_week, %today, max_dates, "Previewing weekly slot");

    res.render(Json(preview(&body.day_of_week, &body.repeat, max_dates, today)));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("preview").post(preview_handler)
}
