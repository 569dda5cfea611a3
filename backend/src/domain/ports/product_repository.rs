//! Port abstraction for the product collection of the record store.

use async_trait::async_trait;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "product store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "product store query failed: {message}",
    }
}

/// Driven port over the stored products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist one product and return it with its assigned identifier.
    async fn insert_one(&self, product: NewProduct) -> Result<Product, ProductPersistenceError>;

    /// Persist several products in one operation, preserving input order.
    async fn insert_many(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Return every stored product.
    async fn list(&self) -> Result<Vec<Product>, ProductPersistenceError>;

    /// Merge `patch` into the product with `id`; unknown identifiers are not an error.
    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<(), ProductPersistenceError>;

    /// Remove the product with `id`; unknown identifiers are not an error.
    async fn delete(&self, id: &ProductId) -> Result<(), ProductPersistenceError>;
}
