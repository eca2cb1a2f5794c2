use lexbook_service::availability::NewException;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use super::{render_app_error, render_error};
use crate::backend_handler::get_backend_from_depot;
use crate::error::AppError;

/// ## Summary
/// GET /api/availability/exceptions - List blackout dates
///
/// ## Errors
/// Returns HTTP 502 if the backend cannot be reached or fails.
#[handler]
async fn list_exceptions_handler(depot: &mut Depot, res: &mut Response) {
    let client = match get_backend_from_depot(depot) {
        Ok(client) => client,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match client.list_exceptions().await {
        Ok(exceptions) => res.render(Json(exceptions)),
        Err(e) => render_app_error(res, &AppError::from(e)),
    }
}

/// ## Summary
/// POST /api/availability/exceptions - Add a blackout date
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid exception.
/// Returns HTTP 502 if the backend cannot be reached or fails.
#[handler]
async fn create_exception_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let exception: NewException = match req.parse_json().await {
        Ok(exception) => exception,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse exception request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    let client = match get_backend_from_depot(depot) {
        Ok(client) => client,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match client.create_exception(&exception).await {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(e) => render_app_error(res, &AppError::from(e)),
    }
}

/// ## Summary
/// DELETE /api/availability/exceptions/{id} - Remove a blackout date
///
/// ## Errors
/// Returns HTTP 400 if `id` is not an integer.
/// Returns the backend's status for backend 4xx responses, otherwise HTTP 502.
#[handler]
async fn delete_exception_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(id) = req.param::<i64>("id") else {
        render_error(res, StatusCode::BAD_REQUEST, "Invalid exception id");
        return;
    };

    let client = match get_backend_from_depot(depot) {
        Ok(client) => client,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match client.delete_exception(id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_app_error(res, &AppError::from(e)),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("exceptions")
        .get(list_exceptions_handler)
        .post(create_exception_handler)
        .push(Router::with_path("{id}").delete(delete_exception_handler))
}
