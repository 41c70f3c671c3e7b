//! Domain errors as form action responses.
//!
//! Client mistakes such as undecodable bodies or malformed invoice ids answer
//! `400` with the error as JSON. Internal failures are logged with their trace
//! id and answered `500` with the same "Something went wrong." text the
//! sign-in form shows. Both carry the form actions' `Cache-Control` policy so
//! a failed submission is never replayed from a cache.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, SOMETHING_WENT_WRONG};
use crate::inbound::http::responses::PRIVATE_NO_CACHE_MUST_REVALIDATE;
use crate::middleware::TRACE_ID_HEADER;

/// Result alias for form action handlers.
pub type ApiResult<T> = Result<T, Error>;

/// What the client sees: internal errors keep only their code and trace id.
fn client_view(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InvalidRequest => error.clone(),
        ErrorCode::InternalError => {
            let generic = Error::internal(SOMETHING_WENT_WRONG);
            match error.trace_id() {
                Some(id) => generic.with_trace_id(id),
                None => generic,
            }
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(
                trace_id = self.trace_id(),
                message = self.message(),
                "form action failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header((header::CACHE_CONTROL, PRIVATE_NO_CACHE_MUST_REVALIDATE));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(client_view(self))
    }
}
