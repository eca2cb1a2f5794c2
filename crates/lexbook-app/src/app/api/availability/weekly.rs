use lexbook_service::availability::AvailabilityDraft;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use super::{render_app_error, render_error};
use crate::backend_handler::get_backend_from_depot;
use crate::error::AppError;
use crate::schedule_handler::get_schedule_from_depot;

/// ## Summary
/// POST /api/availability/weekly?lawyer_user_id={id} - Submit a weekly slot
///
/// Validates the wizard draft, converts its times to 12-hour form and forwards
/// the derived slot to the backend. The backend's JSON is returned with 201.
///
/// ## Errors
/// Returns HTTP 400 if `lawyer_user_id` is missing, the body is malformed or
/// the draft fails validation.
/// Returns the backend's status for backend 4xx responses, otherwise HTTP 502
/// if the backend cannot be reached or fails.
#[handler]
async fn create_weekly_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(lawyer_user_id) = req.query::<i64>("lawyer_user_id") else {
        render_error(res, StatusCode::BAD_REQUEST, "lawyer_user_id is required");
        return;
    };

    let draft: AvailabilityDraft = match req.parse_json().await {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse availability draft");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let (schedule, client) = match (get_schedule_from_depot(depot), get_backend_from_depot(depot)) {
        (Ok(schedule), Ok(client)) => (schedule, client),
        (Err(e), _) | (_, Err(e)) => {
            render_app_error(res, &e);
            return;
        }
    };

    let request = match draft.to_request(schedule.calendar_today()) {
        Ok(request) => request,
        Err(e) => {
            render_app_error(res, &AppError::from(e));
            return;
        }
    };

    tracing::info!(
        lawyer_user_id,
        day = %request.day_of_week,
        start = %request.start_time,
        end = %request.end_time,
        "Submitting weekly availability"
    );

    match client.create_weekly_slot(lawyer_user_id, &request).await {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(e) => render_app_error(res, &AppError::from(e)),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("weekly").post(create_weekly_handler)
}
