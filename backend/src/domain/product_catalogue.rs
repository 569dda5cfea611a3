//! Product creation and pass-through CRUD.
//!
//! Products carry no uniqueness rule. A batch is validated in full before
//! the store is touched and then written with one `insert_many`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    ProductPersistenceError, ProductRepository, ProductsCommand, ProductsQuery,
};
use crate::domain::{
    Error, MissingFieldsError, NewProduct, Product, ProductCandidate, ProductId, ProductPatch,
    Submission,
};

/// Message reported when a candidate lacks a required field.
pub const MISSING_PRODUCT_FIELDS: &str = "Missing required product fields";

/// Product service implementing the product driving ports.
#[derive(Clone)]
pub struct ProductCatalogueService<R> {
    products: Arc<R>,
}

impl<R> ProductCatalogueService<R> {
    /// Create a new service over the given repository.
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }
}

fn map_persistence_error(error: ProductPersistenceError) -> Error {
    match error {
        ProductPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("product store unavailable: {message}"))
        }
        ProductPersistenceError::Query { message } => {
            Error::internal(format!("product store error: {message}"))
        }
    }
}

fn validate(candidate: ProductCandidate, index: Option<usize>) -> Result<NewProduct, Error> {
    NewProduct::try_from(candidate).map_err(|MissingFieldsError { fields }| {
        Error::invalid_request(MISSING_PRODUCT_FIELDS).with_details(json!({
            "code": "missing_field",
            "fields": fields,
            "index": index,
        }))
    })
}

#[async_trait]
impl<R> ProductsCommand for ProductCatalogueService<R>
where
    R: ProductRepository,
{
    async fn create(
        &self,
        submission: Submission<ProductCandidate>,
    ) -> Result<Vec<Product>, Error> {
        match submission {
            Submission::Single(candidate) => {
                let product = validate(candidate, None)?;
                let created = self
                    .products
                    .insert_one(product)
                    .await
                    .map_err(map_persistence_error)?;
                info!(product_id = %created.id, "product created");
                Ok(vec![created])
            }
            Submission::Batch(candidates) => {
                let products = candidates
                    .into_iter()
                    .enumerate()
                    .map(|(index, candidate)| validate(candidate, Some(index)))
                    .collect::<Result<Vec<_>, _>>()?;
                let created = self
                    .products
                    .insert_many(products)
                    .await
                    .map_err(map_persistence_error)?;
                info!(inserted = created.len(), "product batch processed");
                Ok(created)
            }
        }
    }

    async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<(), Error> {
        if patch.is_empty() {
            debug!(product_id = %id, "empty product patch; nothing to update");
            return Ok(());
        }
        self.products
            .update(id, &patch)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), Error> {
        self.products
            .delete(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> ProductsQuery for ProductCatalogueService<R>
where
    R: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.products.list().await.map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockProductRepository;
    use rstest::rstest;

    fn assign_ids(products: Vec<NewProduct>) -> Vec<Product> {
        products
            .into_iter()
            .map(|product| product.into_product(ProductId::random()))
            .collect()
    }

    fn make_service(repo: MockProductRepository) -> ProductCatalogueService<MockProductRepository> {
        ProductCatalogueService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn batch_is_written_in_one_call() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert_many()
            .withf(|products| products.len() == 2)
            .times(1)
            .returning(|products| Ok(assign_ids(products)));

        let created = make_service(repo)
            .create(Submission::Batch(vec![
                ProductCandidate::new("Lamp", 19.5, "home", 3),
                ProductCandidate::new("Desk", 120.0, "office", 1),
            ]))
            .await
            .expect("batch succeeds");

        let names: Vec<_> = created.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Lamp", "Desk"]);
    }

    #[tokio::test]
    async fn empty_batch_still_reaches_the_store() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert_many()
            .withf(|products| products.is_empty())
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let created = make_service(repo)
            .create(Submission::Batch(Vec::new()))
            .await
            .expect("empty batch succeeds");
        assert!(created.is_empty());
    }

    #[tokio::test]
    async fn any_incomplete_candidate_rejects_the_batch() {
        let err = make_service(MockProductRepository::new())
            .create(Submission::Batch(vec![
                ProductCandidate::new("Lamp", 19.5, "home", 3),
                ProductCandidate::new("Free", 0.0, "misc", 1),
            ]))
            .await
            .expect_err("incomplete batch");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), MISSING_PRODUCT_FIELDS);
        assert_eq!(err.details().map(|d| d["index"].clone()), Some(json!(1)));
    }

    #[tokio::test]
    async fn single_candidate_uses_insert_one() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert_one()
            .times(1)
            .returning(|product| Ok(product.into_product(ProductId::random())));

        let created = make_service(repo)
            .create(Submission::Single(ProductCandidate::new("Lamp", 19.5, "home", 3)))
            .await
            .expect("single create succeeds");
        assert_eq!(created.len(), 1);
    }

    #[rstest]
    #[case(ProductPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(ProductPersistenceError::query("bad column"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn delete_maps_persistence_failures(
        #[case] failure: ProductPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().times(1).return_once(move |_| Err(failure));

        let err = make_service(repo)
            .delete(&ProductId::random())
            .await
            .expect_err("failure propagates");
        assert_eq!(err.code(), expected);
    }

    #[tokio::test]
    async fn empty_patch_skips_the_store() {
        make_service(MockProductRepository::new())
            .update(&ProductId::random(), ProductPatch::default())
            .await
            .expect("empty patch succeeds");
    }
}
