//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from the
//! record store; driving ports (`*Command`, `*Query`) are what inbound
//! adapters call. Each driven port exposes a strongly typed error enum so
//! adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod product_repository;
mod products_command;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductPersistenceError, ProductRepository};
pub use products_command::{ProductsCommand, ProductsQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::{UserCreation, UsersCommand};
pub use users_query::UsersQuery;
