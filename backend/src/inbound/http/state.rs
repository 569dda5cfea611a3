//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ProductRepository, ProductsCommand, ProductsQuery, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{ProductCatalogueService, UserRegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub products: Arc<dyn ProductsCommand>,
    pub products_query: Arc<dyn ProductsQuery>,
}

impl HttpState {
    /// Wire the domain services over the given repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_product_backend::inbound::http::state::HttpState;
    /// use user_product_backend::outbound::memory::{
    ///     InMemoryProductRepository, InMemoryUserRepository,
    /// };
    ///
    /// let _state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryProductRepository::new()),
    /// );
    /// ```
    pub fn from_repositories<U, P>(users: Arc<U>, products: Arc<P>) -> Self
    where
        U: UserRepository + 'static,
        P: ProductRepository + 'static,
    {
        let registration = Arc::new(UserRegistrationService::new(users));
        let catalogue = Arc::new(ProductCatalogueService::new(products));
        Self {
            users: registration.clone(),
            users_query: registration,
            products: catalogue.clone(),
            products_query: catalogue,
        }
    }
}
