//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    NewProduct, NewUser, Product, ProductId, ProductPatch, User, UserId, UserPatch,
};

use super::schema::{products, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: f64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub age: f64,
}

impl<'a> NewUserRow<'a> {
    pub fn new(id: Uuid, user: &'a NewUser) -> Self {
        Self {
            id,
            name: user.name(),
            email: user.email(),
            age: user.age(),
        }
    }
}

/// Changeset for partial user updates; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub age: Option<f64>,
}

impl<'a> From<&'a UserPatch> for UserChangeset<'a> {
    fn from(patch: &'a UserPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
            age: patch.age,
        }
    }
}

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            price: row.price,
            category: row.category,
            stock: row.stock,
        }
    }
}

/// Insertable struct for creating product records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub price: f64,
    pub category: &'a str,
    pub stock: f64,
}

impl<'a> NewProductRow<'a> {
    pub fn new(id: Uuid, product: &'a NewProduct) -> Self {
        Self {
            id,
            name: product.name(),
            price: product.price(),
            category: product.category(),
            stock: product.stock(),
        }
    }
}

/// Changeset for partial product updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductChangeset<'a> {
    pub name: Option<&'a str>,
    pub price: Option<f64>,
    pub category: Option<&'a str>,
    pub stock: Option<f64>,
}

impl<'a> From<&'a ProductPatch> for ProductChangeset<'a> {
    fn from(patch: &'a ProductPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            price: patch.price,
            category: patch.category.as_deref(),
            stock: patch.stock,
        }
    }
}
