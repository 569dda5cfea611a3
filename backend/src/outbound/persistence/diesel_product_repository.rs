//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ProductPersistenceError, ProductRepository};
use crate::domain::{NewProduct, Product, ProductId, ProductPatch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewProductRow, ProductChangeset, ProductRow};
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel-backed implementation of the `ProductRepository` port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductPersistenceError {
    map_basic_pool_error(error, ProductPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ProductPersistenceError {
    map_basic_diesel_error(
        error,
        ProductPersistenceError::query,
        ProductPersistenceError::connection,
    )
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn insert_one(&self, product: NewProduct) -> Result<Product, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(products::table)
            .values(NewProductRow::new(Uuid::new_v4(), &product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn insert_many(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductPersistenceError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NewProductRow<'_>> = products
            .iter()
            .map(|product| NewProductRow::new(Uuid::new_v4(), product))
            .collect();
        let inserted = diesel::insert_into(products::table)
            .values(&rows)
            .returning(ProductRow::as_returning())
            .get_results(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted.into_iter().map(Product::from).collect())
    }

    async fn list(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = products::table
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<(), ProductPersistenceError> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(products::table.find(*id.as_uuid()))
            .set(ProductChangeset::from(patch))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(products::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
