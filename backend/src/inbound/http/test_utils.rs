//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::ContentType;
use actix_web::{App, HttpResponse, test, web};

use crate::domain::{Error, UserId};
use crate::inbound::http::configure_form_actions;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Cookie name used by [`test_session_middleware`].
pub const TEST_SESSION_COOKIE: &str = "session";

/// Route that signs a fixed user in without going through `/login`.
pub const TEST_SIGN_IN_PATH: &str = "/test/sign-in";

/// User id persisted by [`TEST_SIGN_IN_PATH`].
pub const TEST_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(TEST_SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by `res`, panicking if there is none.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == TEST_SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// URL-encoded form POST to `uri`.
pub fn form_post(uri: &str, body: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body.to_owned())
}

async fn test_sign_in(session: SessionContext) -> Result<HttpResponse, Error> {
    let user_id = UserId::new(TEST_USER_ID).expect("fixture user id");
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// App wiring the form action routes against `state`, plus
/// [`TEST_SIGN_IN_PATH`].
pub fn form_actions_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .configure(configure_form_actions)
        .route(TEST_SIGN_IN_PATH, web::post().to(test_sign_in))
}
