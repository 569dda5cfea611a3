//! Root greeting.

use actix_web::{HttpResponse, get};

use crate::inbound::http::text;

/// Greeting served at `/`.
pub const WELCOME: &str = "Welcome to User-Product-Management";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["root"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    text(HttpResponse::Ok(), WELCOME)
}
