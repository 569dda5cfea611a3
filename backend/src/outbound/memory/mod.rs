//! Process-local repositories backed by a mutex-guarded `Vec`.
//!
//! Used when no database URL is configured and by the HTTP and behaviour
//! tests. Records keep insertion order, which is also the listing order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ProductPersistenceError, ProductRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    NewProduct, NewUser, Product, ProductId, ProductPatch, User, UserId, UserPatch,
};

fn lock<T, E>(
    records: &Mutex<Vec<T>>,
    poisoned: impl FnOnce(&'static str) -> E,
) -> Result<MutexGuard<'_, Vec<T>>, E> {
    records.lock().map_err(|_| poisoned("in-memory store lock poisoned"))
}

/// In-memory `UserRepository`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already persisted users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        lock(&self.users, UserPersistenceError::connection)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .records()?
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn insert_one(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let user = user.into_user(UserId::random());
        self.records()?.push(user.clone());
        Ok(user)
    }

    async fn insert_many(&self, batch: Vec<NewUser>) -> Result<Vec<User>, UserPersistenceError> {
        let inserted: Vec<User> = batch
            .into_iter()
            .map(|user| user.into_user(UserId::random()))
            .collect();
        self.records()?.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.records()?.clone())
    }

    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<(), UserPersistenceError> {
        if let Some(user) = self.records()?.iter_mut().find(|user| user.id == *id) {
            user.apply(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        self.records()?.retain(|user| user.id != *id);
        Ok(())
    }
}

/// In-memory `ProductRepository`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<Product>>, ProductPersistenceError> {
        lock(&self.products, ProductPersistenceError::connection)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert_one(&self, product: NewProduct) -> Result<Product, ProductPersistenceError> {
        let product = product.into_product(ProductId::random());
        self.records()?.push(product.clone());
        Ok(product)
    }

    async fn insert_many(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductPersistenceError> {
        let inserted: Vec<Product> = products
            .into_iter()
            .map(|product| product.into_product(ProductId::random()))
            .collect();
        self.records()?.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn list(&self) -> Result<Vec<Product>, ProductPersistenceError> {
        Ok(self.records()?.clone())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<(), ProductPersistenceError> {
        if let Some(product) = self.records()?.iter_mut().find(|product| product.id == *id) {
            product.apply(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductPersistenceError> {
        self.records()?.retain(|product| product.id != *id);
        Ok(())
    }
}
