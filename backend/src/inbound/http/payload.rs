//! Request body decoding.
//!
//! A body that does not decode into the endpoint's JSON shape is a
//! validation failure and answers 500 with the decoder's message.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::warn;

use crate::domain::Error;

/// Prefix of the message returned for undecodable bodies.
pub const BODY_PARSE_ERROR: &str = "Error parsing request body";

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), error = %err, "rejected request body");
    Error::internal(format!("{BODY_PARSE_ERROR}: {err}")).into()
}

/// JSON extractor configuration shared by every endpoint.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[expect(dead_code, reason = "only decoding is exercised")]
        age: i32,
    }

    async fn accept(_body: web::Json<Probe>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn wrongly_typed_field_is_a_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/", web::post().to(accept)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/")
            .set_json(serde_json::json!({"age": "thirty"}))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(res).await;
        let text = std::str::from_utf8(&body).expect("utf8");
        assert!(text.starts_with("Error parsing request body: "), "{text}");
    }
}
