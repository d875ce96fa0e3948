//! HTTP mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic: Actix handlers return
//! `ApiResult` and this impl turns failures into consistent JSON responses.
//! Internal messages are redacted before leaving the process; the trace id
//! header lets operators correlate the redacted response with logs.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(message = error.message(), "internal error surfaced to HTTP");
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("nope"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_expected_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[test]
    fn internal_detail_is_redacted() {
        let response = Error::internal("connection string: postgres://...").error_response();
        let body = actix_web::body::to_bytes_limited(response.into_body(), 4096);
        let body = futures_util::FutureExt::now_or_never(body)
            .expect("body is ready")
            .expect("body within limit")
            .expect("body readable");
        let rendered = String::from_utf8(body.to_vec()).expect("utf8 body");
        assert!(!rendered.contains("postgres://"));
        assert!(rendered.contains("Internal server error"));
    }

    #[test]
    fn non_internal_messages_pass_through() {
        let response = Error::unauthorized("login required").error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
