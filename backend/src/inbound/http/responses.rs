//! Response builders shared by the form action handlers.
//!
//! Action responses are per-user and reflect a mutation, so every one of them
//! is marked private and must be revalidated before reuse.

use actix_web::HttpResponse;
use actix_web::http::header::{self, HeaderValue};
use serde::Serialize;

use crate::domain::{ActionOutcome, FormState, ViewPath};

/// Cache policy applied to every form action response.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// `303 See Other` to `path`.
pub fn see_other(path: &ViewPath) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, path.as_str()))
        .insert_header((
            header::CACHE_CONTROL,
            HeaderValue::from_static(PRIVATE_NO_CACHE_MUST_REVALIDATE),
        ))
        .finish()
}

/// `200 OK` with `body` serialised as JSON.
pub fn form_json<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((
            header::CACHE_CONTROL,
            HeaderValue::from_static(PRIVATE_NO_CACHE_MUST_REVALIDATE),
        ))
        .json(body)
}

/// Render the form state.
pub fn form_state(state: &FormState) -> HttpResponse {
    form_json(state)
}

/// Map an action outcome onto the wire.
pub fn action_outcome(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Render(state) => form_state(&state),
        ActionOutcome::Redirect(path) => see_other(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    fn cache_control(res: &HttpResponse) -> Option<&str> {
        res.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
    }

    #[test]
    fn redirect_outcome_becomes_see_other() {
        let res = action_outcome(ActionOutcome::Redirect(ViewPath::invoices()));

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/dashboard/invoices")
        );
        assert_eq!(cache_control(&res), Some(PRIVATE_NO_CACHE_MUST_REVALIDATE));
    }

    #[actix_web::test]
    async fn render_outcome_becomes_json_state() {
        let res = action_outcome(ActionOutcome::Render(FormState::message("Deleted Invoice.")));

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(cache_control(&res), Some(PRIVATE_NO_CACHE_MUST_REVALIDATE));
        let bytes = to_bytes(res.into_body()).await.expect("body");
        assert_eq!(bytes.as_ref(), br#"{"message":"Deleted Invoice."}"#);
    }
}
