//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the HTTP paths and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds.

use crate::inbound::http::schemas::{
    ProductCandidateSchema, ProductPatchSchema, ProductSchema, ProductSubmissionSchema,
    UserCandidateSchema, UserPatchSchema, UserSchema, UserSubmissionSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User-Product-Management API",
        description = "CRUD for users and products with email deduplication on user creation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::welcome::welcome,
        crate::inbound::http::users::create_users,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::products::create_products,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserCandidateSchema,
        UserSubmissionSchema,
        UserPatchSchema,
        ProductSchema,
        ProductCandidateSchema,
        ProductSubmissionSchema,
        ProductPatchSchema,
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "products", description = "Product records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
