//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types; row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a lazily built `bb8` pool
//! through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use user_product_backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig,
//! };
//!
//! # async fn run() {
//! let pool = DbPool::new(PoolConfig::new("postgres://127.0.0.1:5432/user-product-db"));
//! let users = DieselUserRepository::new(pool.clone());
//! # let _ = users;
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_product_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_product_repository::DieselProductRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
