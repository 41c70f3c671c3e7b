//! Invoice form action handlers.
//!
//! ```text
//! POST /dashboard/invoices/create        customerId=..&amount=..&status=..
//! POST /dashboard/invoices/{id}/edit     customerId=..&amount=..&status=..
//! POST /dashboard/invoices/{id}/delete
//! ```
//!
//! Successful create and edit answer `303 See Other` to the invoice listing;
//! everything else answers `200` with the JSON form state. Anonymous requests
//! are sent to the login page.

use actix_web::{HttpResponse, post, web};
use serde_json::json;

use crate::domain::{Error, FormState, InvoiceId, ViewPath};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::{FormPairs, into_form_data};
use crate::inbound::http::responses::{action_outcome, form_state, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn login_redirect(session: &SessionContext) -> ApiResult<Option<HttpResponse>> {
    Ok(session
        .user_id()?
        .is_none()
        .then(|| see_other(&ViewPath::login())))
}

fn parse_invoice_id(raw: String) -> ApiResult<InvoiceId> {
    InvoiceId::new(raw).map_err(|err| {
        Error::invalid_request(format!("invalid invoice id: {err}")).with_details(json!({
            "field": "id",
            "code": "invalid_invoice_id",
        }))
    })
}

/// Create an invoice from the submitted form.
#[post("/invoices/create")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: FormPairs,
) -> ApiResult<HttpResponse> {
    if let Some(redirect) = login_redirect(&session)? {
        return Ok(redirect);
    }
    let outcome = state
        .invoices
        .create_invoice(FormState::default(), into_form_data(form))
        .await;
    Ok(action_outcome(outcome))
}

/// Update invoice `{id}` from the submitted form.
#[post("/invoices/{id}/edit")]
pub async fn edit_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: FormPairs,
) -> ApiResult<HttpResponse> {
    if let Some(redirect) = login_redirect(&session)? {
        return Ok(redirect);
    }
    let id = parse_invoice_id(path.into_inner())?;
    let outcome = state
        .invoices
        .edit_invoice(id, FormState::default(), into_form_data(form))
        .await;
    Ok(action_outcome(outcome))
}

/// Delete invoice `{id}`.
#[post("/invoices/{id}/delete")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    if let Some(redirect) = login_redirect(&session)? {
        return Ok(redirect);
    }
    let id = parse_invoice_id(path.into_inner())?;
    let state = state.invoices.delete_invoice(id).await;
    Ok(form_state(&state))
}

#[cfg(test)]
#[path = "invoices_tests.rs"]
mod tests;
