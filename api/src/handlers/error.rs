//! Mapping of service results and request failures onto HTTP responses
//!
//! Every body is the `{success, message, data}` envelope. Business
//! rejections keep status 200 with `success = false`; malformed requests
//! get 400, bearer failures 401, store outages 503 and any other fault
//! 500 with the generic message.

use actix_web::{
    error::{JsonPayloadError, ResponseError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use serde::Serialize;
use validator::ValidationErrors;

use jr_core::errors::{DomainError, DomainResult};
use jr_core::services::envelope;
use jr_shared::types::ApiResponse;

/// Error rendered as a failure envelope
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Build from failed field validation, naming the offending fields
    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        Self::bad_request(format!("Invalid request: {}", fields.join(", ")))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ApiResponse::<()>::failure(&self.message))
    }
}

/// HTTP status for a failed service call
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        err if err.is_unexpected() => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

/// Render a service result as an envelope response
pub fn respond<T: Serialize>(result: DomainResult<T>, success_message: &str) -> HttpResponse {
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };
    HttpResponse::build(status).json(envelope(result, success_message))
}

/// JSON body errors become a 400 envelope without parser details
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    ApiError::bad_request("Invalid request body").into()
}
