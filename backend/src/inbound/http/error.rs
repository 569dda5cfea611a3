//! HTTP adapter mapping for domain errors.
//!
//! Failures are rendered as `text/plain` bodies holding the error message.
//! Handlers collapse domain errors with [`at_boundary`] before returning them:
//! conflicts keep their message and map to 409, anything else becomes a 500
//! carrying the endpoint's own message.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder
            .content_type(ContentType::plaintext())
            .body(self.message().to_owned())
    }
}

/// Collapse a domain error into what an endpoint reports.
///
/// Conflicts pass through unchanged. Every other failure is logged and
/// replaced by an internal error whose message `describe` builds from the
/// original; trace identifier and details are carried over.
pub fn at_boundary<F>(err: Error, describe: F) -> Error
where
    F: FnOnce(&Error) -> String,
{
    if err.code() == ErrorCode::Conflict {
        return err;
    }

    error!(
        code = ?err.code(),
        message = err.message(),
        details = ?err.details(),
        trace_id = ?err.trace_id(),
        "request failed"
    );
    let mut internal = Error::internal(describe(&err));
    if let Some(id) = err.trace_id() {
        internal = internal.with_trace_id(id.to_owned());
    }
    match err.details() {
        Some(details) => internal.with_details(details.clone()),
        None => internal,
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::try_new(ErrorCode::InternalError, err.to_string())
            .unwrap_or_else(|_| Self::internal("Internal server error"))
    }
}
