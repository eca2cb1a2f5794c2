mod app_specific;
mod availability;

use salvo::Router;

// Re-export route constants from core
pub use lexbook_core::constants::{
    API_ROUTE_COMPONENT, APP_ROUTE_COMPONENT, AVAILABILITY_ROUTE_COMPONENT,
};
pub use availability::{
    ErrorResponse, ExportRequest, PreviewRequest, TimeRangeRequest, TimeRangeResponse,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(availability::routes())
}
