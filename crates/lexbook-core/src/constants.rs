/// Route components of the HTTP front
pub const API_ROUTE_COMPONENT: &str = "api";
pub const APP_ROUTE_COMPONENT: &str = "app";
pub const AVAILABILITY_ROUTE_COMPONENT: &str = "availability";

/// Paths on the external availability backend
pub const BACKEND_LAWYER_AVAILABILITY_PREFIX: &str = "/api/lawyer-availability";
pub const BACKEND_WEEKLY_PATH: &str =
    const_str::concat!(BACKEND_LAWYER_AVAILABILITY_PREFIX, "/weekly");
pub const BACKEND_BRANCHES_PATH: &str =
    const_str::concat!(BACKEND_LAWYER_AVAILABILITY_PREFIX, "/branches");
pub const BACKEND_EXCEPTIONS_PATH: &str = "/availability/exceptions";
