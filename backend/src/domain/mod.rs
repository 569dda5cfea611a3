//! Domain primitives, services, and ports.
//!
//! Purpose: hold the record types, the presence rule, and the use-case
//! services that sit between the HTTP adapter and the record store. Nothing
//! here depends on actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User*, Product*: record shapes from candidate to persisted.
//! - Submission: single-or-batch request body.
//! - UserRegistrationService: validation and email deduplication engine.
//! - ProductCatalogueService: product creation and pass-through CRUD.

pub mod error;
pub mod ports;
pub mod presence;
pub mod product;
pub mod product_catalogue;
pub mod record_id;
pub mod submission;
pub mod trace_id;
pub mod user;
pub mod user_registration;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::presence::MissingFieldsError;
pub use self::product::{NewProduct, Product, ProductCandidate, ProductPatch};
pub use self::product_catalogue::ProductCatalogueService;
pub use self::record_id::{ProductId, RecordIdError, UserId};
pub use self::submission::Submission;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserCandidate, UserPatch};
pub use self::user_registration::UserRegistrationService;
