//! Driving ports for product mutations and reads.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductCandidate, ProductId, ProductPatch, Submission};

/// Domain use-case port for creating, updating, and deleting products.
#[async_trait]
pub trait ProductsCommand: Send + Sync {
    /// Validate and persist one or many candidates, returning what was written.
    async fn create(&self, submission: Submission<ProductCandidate>)
    -> Result<Vec<Product>, Error>;

    /// Merge a partial update into the product with `id`.
    async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<(), Error>;

    /// Delete the product with `id`.
    async fn delete(&self, id: &ProductId) -> Result<(), Error>;
}

/// Domain use-case port for listing products.
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Return every stored product.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;
}
