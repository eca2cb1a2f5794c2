use salvo::http::StatusCode;
use thiserror::Error;

use lexbook_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    ScheduleError(#[from] lexbook_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] lexbook_core::error::CoreError),
}

impl AppError {
    /// ## Summary
    /// Maps the error onto the status code returned to the wizard.
    ///
    /// Backend 4xx responses pass through; other backend and transport
    /// failures become 502.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::Backend { status, .. }) => {
                match StatusCode::from_u16(*status) {
                    Ok(code) if code.is_client_error() => code,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
            Self::ServiceError(ServiceError::HttpError(_)) => StatusCode::BAD_GATEWAY,
            Self::ServiceError(
                ServiceError::ValidationError(_) | ServiceError::ScheduleError(_),
            )
            | Self::ScheduleError(_) => StatusCode::BAD_REQUEST,
            Self::ServiceError(ServiceError::InvalidUrl(_)) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
