use salvo::writing::Json;
use salvo::{Depot, Response, Router, handler};

use super::render_app_error;
use crate::backend_handler::get_backend_from_depot;
use crate::error::AppError;

/// ## Summary
/// GET /api/availability/branches - List bookable locations
///
/// ## Errors
/// Returns HTTP 502 if the backend cannot be reached or fails.
#[handler]
async fn list_branches_handler(depot: &mut Depot, res: &mut Response) {
    let client = match get_backend_from_depot(depot) {
        Ok(client) => client,
        Err(e) => {
            render_app_error(res, &e);
            return;
        }
    };

    match client.list_branches().await {
        Ok(branches) => res.render(Json(branches)),
        Err(e) => render_app_error(res, &AppError::from(e)),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("branches").get(list_branches_handler)
}
