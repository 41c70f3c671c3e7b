//! HTTP tests for the invoice form action handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockInvoiceFormActions, MockSignInCommand};
use crate::domain::{ActionOutcome, ErrorCode, FieldErrors, InvoiceField};
use crate::inbound::http::responses::PRIVATE_NO_CACHE_MUST_REVALIDATE;
use crate::inbound::http::test_utils::{
    TEST_SIGN_IN_PATH, form_actions_app, form_post, session_cookie,
};

const INVOICE_ID: &str = "2f1d7a64-5a0c-4b0e-9a44-0d0f3c1d9b21";

fn state_with(invoices: MockInvoiceFormActions) -> HttpState {
    HttpState::new(Arc::new(invoices), Arc::new(MockSignInCommand::new()))
}

fn header_str<B>(res: &actix_web::dev::ServiceResponse<B>, name: header::HeaderName) -> Option<&str> {
    res.headers().get(name).and_then(|value| value.to_str().ok())
}

#[rstest]
#[case("/dashboard/invoices/create")]
#[case("/dashboard/invoices/2f1d7a64-5a0c-4b0e-9a44-0d0f3c1d9b21/edit")]
#[case("/dashboard/invoices/2f1d7a64-5a0c-4b0e-9a44-0d0f3c1d9b21/delete")]
#[actix_web::test]
async fn anonymous_requests_are_sent_to_login(#[case] uri: &str) {
    let mut invoices = MockInvoiceFormActions::new();
    invoices.expect_create_invoice().never();
    invoices.expect_edit_invoice().never();
    invoices.expect_delete_invoice().never();
    let app = test::init_service(form_actions_app(state_with(invoices))).await;

    let res = test::call_service(
        &app,
        form_post(uri, "customerId=abc&amount=12.50&status=paid").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_str(&res, header::LOCATION), Some("/login"));
}

#[actix_web::test]
async fn create_redirects_to_listing_on_success() {
    let mut invoices = MockInvoiceFormActions::new();
    invoices
        .expect_create_invoice()
        .withf(|prev, form| {
            *prev == FormState::default()
                && form.get("customerId") == Some("abc")
                && form.get("amount") == Some("12.50")
                && form.get("status") == Some("paid")
        })
        .times(1)
        .return_once(|_, _| ActionOutcome::Redirect(ViewPath::invoices()));
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        form_post(
            "/dashboard/invoices/create",
            "customerId=abc&amount=12.50&status=paid",
        )
        .cookie(session_cookie(&signed_in))
        .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_str(&res, header::LOCATION), Some("/dashboard/invoices"));
    assert_eq!(
        header_str(&res, header::CACHE_CONTROL),
        Some(PRIVATE_NO_CACHE_MUST_REVALIDATE)
    );
}

#[actix_web::test]
async fn create_renders_field_errors() {
    let mut errors = FieldErrors::default();
    errors.push(InvoiceField::Amount, "Please enter an amount greater than $0.");
    let state = FormState::invalid(errors, "Missing Fields. Failed to Create Invoice.");
    let mut invoices = MockInvoiceFormActions::new();
    invoices
        .expect_create_invoice()
        .times(1)
        .return_once(move |_, _| ActionOutcome::Render(state));
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        form_post(
            "/dashboard/invoices/create",
            "customerId=abc&amount=0&status=paid",
        )
        .cookie(session_cookie(&signed_in))
        .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "errors": { "amount": ["Please enter an amount greater than $0."] },
            "message": "Missing Fields. Failed to Create Invoice.",
        })
    );
}

#[actix_web::test]
async fn edit_passes_path_id_to_action() {
    let mut invoices = MockInvoiceFormActions::new();
    invoices
        .expect_edit_invoice()
        .withf(|id, _, form| id.as_str() == INVOICE_ID && form.get("status") == Some("pending"))
        .times(1)
        .return_once(|_, _, _| ActionOutcome::Redirect(ViewPath::invoices()));
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        form_post(
            &format!("/dashboard/invoices/{INVOICE_ID}/edit"),
            "customerId=abc&amount=3&status=pending",
        )
        .cookie(session_cookie(&signed_in))
        .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_str(&res, header::LOCATION), Some("/dashboard/invoices"));
}

#[actix_web::test]
async fn delete_returns_confirmation_state() {
    let mut invoices = MockInvoiceFormActions::new();
    invoices
        .expect_delete_invoice()
        .withf(|id| id.as_str() == INVOICE_ID)
        .times(1)
        .return_once(|_| FormState::message("Deleted Invoice."));
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/dashboard/invoices/{INVOICE_ID}/delete"))
            .cookie(session_cookie(&signed_in))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        header_str(&res, header::CACHE_CONTROL),
        Some(PRIVATE_NO_CACHE_MUST_REVALIDATE)
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": "Deleted Invoice." }));
}

#[actix_web::test]
async fn blank_invoice_id_is_a_bad_request() {
    let mut invoices = MockInvoiceFormActions::new();
    invoices.expect_delete_invoice().never();
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dashboard/invoices/%20/delete")
            .cookie(session_cookie(&signed_in))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Error = test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        body.details(),
        Some(&json!({ "field": "id", "code": "invalid_invoice_id" }))
    );
}

#[actix_web::test]
async fn malformed_form_body_is_a_bad_request() {
    let mut invoices = MockInvoiceFormActions::new();
    invoices.expect_create_invoice().never();
    let app = test::init_service(form_actions_app(state_with(invoices))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri(TEST_SIGN_IN_PATH).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dashboard/invoices/create")
            .insert_header(ContentType::plaintext())
            .set_payload("customerId=abc")
            .cookie(session_cookie(&signed_in))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
