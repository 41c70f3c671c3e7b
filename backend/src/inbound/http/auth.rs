//! Login form handler.
//!
//! ```text
//! POST /login email=user@nextmail.com&password=123456
//! ```
//!
//! A successful sign-in stores the user id in the session cookie and answers
//! `303 See Other` to the dashboard. Rejections answer `200` with
//! `{"errorMessage": "..."}` for the form to render.

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use tracing::info;

use crate::domain::{Error, SignInOutcome, ViewPath};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::{FormPairs, into_form_data};
use crate::inbound::http::responses::{form_json, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body returned when the login form should show a message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormResponse {
    /// Message for the form; absent once signed in.
    pub error_message: Option<&'static str>,
}

/// Authenticate with the credentials provider and establish a session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: FormPairs,
) -> ApiResult<HttpResponse> {
    let outcome = state
        .sign_in
        .authenticate(None, into_form_data(form))
        .await
        .map_err(|err| Error::internal(format!("sign-in failed: {err}")))?;

    match outcome {
        SignInOutcome::SignedIn(user_id) => {
            session.persist_user(&user_id)?;
            info!(user_id = %user_id, "user signed in");
            Ok(see_other(&ViewPath::dashboard()))
        }
        rejected @ SignInOutcome::Rejected(_) => Ok(form_json(&LoginFormResponse {
            error_message: rejected.error_message(),
        })),
    }
}
