//! HTTP inbound adapter exposing the form action endpoints.

pub mod auth;
pub mod error;
pub mod form;
pub mod health;
pub mod invoices;
pub mod responses;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register the login and dashboard form action routes.
///
/// Callers provide [`state::HttpState`] as app data and wrap the routes in a
/// session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use dashboard::inbound::http::configure_form_actions;
///
/// let _app = App::new().configure(configure_form_actions);
/// ```
pub fn configure_form_actions(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form::form_config())
        .service(auth::login)
        .service(
            web::scope("/dashboard")
                .service(invoices::create_invoice)
                .service(invoices::edit_invoice)
                .service(invoices::delete_invoice),
        );
}
