//! Form body extraction.
//!
//! Handlers read `application/x-www-form-urlencoded` bodies as ordered
//! `(name, value)` pairs so repeated fields survive into [`FormData`].

use actix_web::{HttpRequest, error::UrlencodedError, web};
use serde_json::json;

use crate::domain::{Error, FormData};

/// Raw form body as submitted.
pub type FormPairs = web::Form<Vec<(String, String)>>;

/// Convert an extracted body into domain form data.
pub fn into_form_data(form: FormPairs) -> FormData {
    FormData::from(form.into_inner())
}

fn malformed_form(error: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("form body could not be decoded")
        .with_details(json!({
            "code": "invalid_form",
            "reason": error.to_string(),
        }))
        .into()
}

/// Extractor configuration turning decode failures into `400` JSON errors.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(malformed_form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, HttpResponse, post, test};
    use serde_json::Value;

    #[post("/echo")]
    async fn echo(form: FormPairs) -> HttpResponse {
        let form = into_form_data(form);
        let tags: Vec<&str> = form.get_all("tag").collect();
        HttpResponse::Ok().json(json!({
            "first": form.get("tag"),
            "all": tags,
        }))
    }

    #[actix_web::test]
    async fn repeated_fields_keep_submission_order() {
        let app = test::init_service(App::new().app_data(form_config()).service(echo)).await;
        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(ContentType::form_url_encoded())
            .set_payload("tag=b&tag=a&tag=c")
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"first": "b", "all": ["b", "a", "c"]}));
    }

    #[actix_web::test]
    async fn wrong_content_type_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(form_config()).service(echo)).await;
        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(ContentType::json())
            .set_payload(r#"{"tag":"a"}"#)
            .to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "invalid_form");
    }
}
