use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Database(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError, None)
            }
            AppError::Validation(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::ValidationError, Some(msg))
            }
            AppError::DuplicateEmail => error_resp(
                StatusCode::CONFLICT,
                ErrorCode::DuplicateEmail,
                Some(AppError::DuplicateEmail.to_string()),
            ),
            AppError::InvalidLicence => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidLicence,
                Some(AppError::InvalidLicence.to_string()),
            ),
            AppError::InvalidCredentials => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::InvalidCredentials,
                Some(AppError::InvalidCredentials.to_string()),
            ),
            AppError::AccountNotActivated => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::AccountNotActivated,
                Some(AppError::AccountNotActivated.to_string()),
            ),
            // Delivery detail is logged above; the body stays generic.
            AppError::Delivery(_) => {
                error_resp(StatusCode::BAD_GATEWAY, ErrorCode::DeliveryError, None)
            }
            AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, None)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
