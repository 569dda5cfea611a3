//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod payload;
pub mod products;
pub mod schemas;
pub mod state;
pub mod users;
pub mod welcome;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, web};

pub use error::ApiResult;

/// Plain-text response with a fixed body.
pub(crate) fn text(mut builder: HttpResponseBuilder, body: &'static str) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(body)
}

/// Register the welcome, user, and product endpoints with the shared JSON
/// body configuration.
///
/// Handlers expect [`state::HttpState`] in the application data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use user_product_backend::inbound::http::{configure, state::HttpState};
/// use user_product_backend::outbound::memory::{
///     InMemoryProductRepository, InMemoryUserRepository,
/// };
///
/// let state = HttpState::from_repositories(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(InMemoryProductRepository::new()),
/// );
/// let _app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload::json_config())
        .service(welcome::welcome)
        .service(users::create_users)
        .service(users::list_users)
        .service(users::update_user)
        .service(users::delete_user)
        .service(products::create_products)
        .service(products::list_products)
        .service(products::update_product)
        .service(products::delete_product);
}
