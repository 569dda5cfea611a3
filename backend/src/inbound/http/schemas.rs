//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; the
//! wrappers here mirror their JSON shapes for the generated document.

#![expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]

use serde::Deserialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
pub struct UserSchema {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = 36)]
    age: f64,
}

/// OpenAPI schema for [`crate::domain::UserCandidate`].
///
/// Every field is required; empty strings and `0` count as missing.
#[derive(ToSchema, Deserialize)]
#[schema(as = UserCandidate)]
pub struct UserCandidateSchema {
    #[schema(example = "Ada Lovelace")]
    name: Option<String>,
    #[schema(example = "ada@example.com")]
    email: Option<String>,
    #[schema(example = 36)]
    age: Option<f64>,
}

/// `POST /users` body: one candidate or an array of them.
#[derive(ToSchema, Deserialize)]
#[serde(untagged)]
#[schema(as = UserSubmission)]
pub enum UserSubmissionSchema {
    Batch(Vec<UserCandidateSchema>),
    Single(UserCandidateSchema),
}

/// OpenAPI schema for [`crate::domain::UserPatch`].
#[derive(ToSchema)]
#[schema(as = UserPatch)]
pub struct UserPatchSchema {
    name: Option<String>,
    email: Option<String>,
    age: Option<f64>,
}

/// OpenAPI schema for [`crate::domain::Product`].
#[derive(ToSchema)]
#[schema(as = Product)]
pub struct ProductSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Desk lamp")]
    name: String,
    #[schema(example = 19.5)]
    price: f64,
    #[schema(example = "home")]
    category: String,
    #[schema(example = 3)]
    stock: f64,
}

/// OpenAPI schema for [`crate::domain::ProductCandidate`].
#[derive(ToSchema, Deserialize)]
#[schema(as = ProductCandidate)]
pub struct ProductCandidateSchema {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    stock: Option<f64>,
}

/// `POST /products` body: one candidate or an array of them.
#[derive(ToSchema, Deserialize)]
#[serde(untagged)]
#[schema(as = ProductSubmission)]
pub enum ProductSubmissionSchema {
    Batch(Vec<ProductCandidateSchema>),
    Single(ProductCandidateSchema),
}

/// OpenAPI schema for [`crate::domain::ProductPatch`].
#[derive(ToSchema)]
#[schema(as = ProductPatch)]
pub struct ProductPatchSchema {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    stock: Option<f64>,
}
