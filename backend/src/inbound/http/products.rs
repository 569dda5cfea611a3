//! Products API handlers.

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::{Error, Product, ProductCandidate, ProductId, ProductPatch, Submission};
use crate::inbound::http::error::at_boundary;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, text};

const PRODUCTS_CREATED: &str = "Products created successfully";
const PRODUCT_UPDATED: &str = "Product updated successfully";
const PRODUCT_DELETED: &str = "Product deleted successfully";

fn parse_product_id(raw: &str, failure: &'static str) -> ApiResult<ProductId> {
    raw.parse().map_err(|err| {
        at_boundary(
            Error::invalid_request(format!("invalid product id: {err}")),
            |_| failure.to_owned(),
        )
    })
}

/// Create one product or a batch of products.
#[utoipa::path(
    post,
    path = "/products",
    request_body = crate::inbound::http::schemas::ProductSubmissionSchema,
    responses(
        (status = 201, description = "Products created", body = String, content_type = "text/plain"),
        (status = 500, description = "Validation or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["products"],
    operation_id = "createProducts"
)]
#[post("/products")]
pub async fn create_products(
    state: web::Data<HttpState>,
    payload: web::Json<Submission<ProductCandidate>>,
) -> ApiResult<HttpResponse> {
    state
        .products
        .create(payload.into_inner())
        .await
        .map_err(|err| at_boundary(err, |e| format!("Error creating products: {}", e.message())))?;
    Ok(text(HttpResponse::Created(), PRODUCTS_CREATED))
}

/// List every stored product.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Products", body = [crate::inbound::http::schemas::ProductSchema]),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Product>>> {
    state
        .products_query
        .list_products()
        .await
        .map(web::Json)
        .map_err(|err| at_boundary(err, |_| "Error fetching products".to_owned()))
}

#[utoipa::path(
    patch,
    path = "/products/{productId}",
    params(("productId" = String, Path, description = "Product identifier")),
    request_body = crate::inbound::http::schemas::ProductPatchSchema,
    responses(
        (status = 200, description = "Product updated", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[patch("/products/{productId}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ProductPatch>,
) -> ApiResult<HttpResponse> {
    const FAILURE: &str = "Error updating product";
    let id = parse_product_id(&path, FAILURE)?;
    state
        .products
        .update(&id, payload.into_inner())
        .await
        .map_err(|err| at_boundary(err, |_| FAILURE.to_owned()))?;
    Ok(text(HttpResponse::Ok(), PRODUCT_UPDATED))
}

#[utoipa::path(
    delete,
    path = "/products/{productId}",
    params(("productId" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{productId}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    const FAILURE: &str = "Error deleting product";
    let id = parse_product_id(&path, FAILURE)?;
    state
        .products
        .delete(&id)
        .await
        .map_err(|err| at_boundary(err, |_| FAILURE.to_owned()))?;
    Ok(text(HttpResponse::Ok(), PRODUCT_DELETED))
}
