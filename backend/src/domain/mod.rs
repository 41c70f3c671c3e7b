//! Domain primitives, form actions, and ports.
//!
//! Purpose: Define strongly typed values for the invoice and sign-in forms
//! plus the services that validate submissions and drive the persistence,
//! cache, and identity ports. Nothing here knows about HTTP or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - FormData / FormState / ActionOutcome: what forms submit and receive.
//! - InvoiceDraft and its field types: validated invoice input.
//! - InvoiceActionsService: create, edit, and delete form actions.
//! - CredentialsSignInService: sign-in form action.

pub mod auth;
pub mod error;
pub mod form_data;
pub mod form_state;
pub mod invoice;
pub mod invoice_actions;
pub mod invoice_form;
pub mod ports;
pub mod sign_in_service;
pub mod trace_id;
pub mod user;
pub mod view_path;

pub use self::auth::{
    AuthErrorKind, CREDENTIALS_PROVIDER, INVALID_CREDENTIALS, LoginCredentials,
    LoginValidationError, MIN_PASSWORD_LEN, SOMETHING_WENT_WRONG, SignInOutcome,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::form_data::FormData;
pub use self::form_state::{ActionOutcome, FormState};
pub use self::invoice::{
    AmountError, AmountInCents, CustomerId, IdValidationError, InvoiceDraft, InvoiceId,
    InvoiceStatus,
};
pub use self::invoice_actions::InvoiceActionsService;
pub use self::invoice_form::{FieldErrors, InvoiceField, validate_invoice_form};
pub use self::sign_in_service::CredentialsSignInService;
pub use self::trace_id::TraceId;
pub use self::user::{UserId, UserValidationError};
pub use self::view_path::{ViewPath, ViewPathValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use dashboard::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("form body could not be decoded"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
