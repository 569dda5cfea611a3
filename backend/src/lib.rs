//! User and product management service.
//!
//! The crate is laid out hexagonally: [`domain`] holds the record types and
//! the user registration engine, [`inbound`] the actix-web adapter, and
//! [`outbound`] the record-store adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
