//! Builder for the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_product_backend::inbound::http::state::HttpState;
use user_product_backend::outbound::memory::{InMemoryProductRepository, InMemoryUserRepository};
use user_product_backend::outbound::persistence::{
    DbPool, DieselProductRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::from_repositories(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselProductRepository::new(pool.clone())),
    )
}

fn in_memory_state() -> HttpState {
    HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryProductRepository::new()),
    )
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over process memory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => {
            info!("no database pool configured; records are kept in memory");
            in_memory_state()
        }
    };
    web::Data::new(state)
}
