//! Users API handlers.
//!
//! ```text
//! POST   /users            {"name":"Ada","email":"ada@example.com","age":36}
//! POST   /users            [{...}, {...}]
//! GET    /users
//! PATCH  /users/{userId}   {"age":37}
//! DELETE /users/{userId}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::json;

use crate::domain::ports::UserCreation;
use crate::domain::{Error, Submission, User, UserCandidate, UserId, UserPatch};
use crate::inbound::http::error::at_boundary;
use crate::inbound::http::{ApiResult, text};
use crate::inbound::http::state::HttpState;

const USER_CREATED: &str = "User created successfully";
const USERS_CREATED: &str = "Users created successfully";
const USER_UPDATED: &str = "User updated successfully";
const USER_DELETED: &str = "User deleted successfully";

fn parse_user_id(raw: &str, failure: &'static str) -> ApiResult<UserId> {
    raw.parse().map_err(|err| {
        at_boundary(
            Error::invalid_request(format!("invalid user id: {err}")),
            |_| failure.to_owned(),
        )
    })
}

fn conflict_for(rejected: &[String]) -> Error {
    Error::conflict(format!(
        "Users with these emails already exist: {}",
        rejected.join(", ")
    ))
    .with_details(json!({ "code": "duplicate_email", "emails": rejected }))
}

/// Create one user or a batch of users.
///
/// A batch whose emails partly clash with stored users still persists the
/// rest and answers 409 listing the clashing emails.
#[utoipa::path(
    post,
    path = "/users",
    request_body = crate::inbound::http::schemas::UserSubmissionSchema,
    responses(
        (status = 201, description = "Users created", body = String, content_type = "text/plain"),
        (status = 409, description = "Email already registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Validation or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "createUsers"
)]
#[post("/users")]
pub async fn create_users(
    state: web::Data<HttpState>,
    payload: web::Json<Submission<UserCandidate>>,
) -> ApiResult<HttpResponse> {
    let submission = payload.into_inner();
    let created_message = if submission.is_batch() {
        USERS_CREATED
    } else {
        USER_CREATED
    };

    match state.users.create(submission).await {
        Ok(UserCreation::Created { .. }) => Ok(text(HttpResponse::Created(), created_message)),
        Ok(UserCreation::PartialConflict { rejected, .. }) => Err(conflict_for(&rejected)),
        Err(err) => Err(at_boundary(err, |e| {
            format!("Error creating users: {}", e.message())
        })),
    }
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [crate::inbound::http::schemas::UserSchema]),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    state
        .users_query
        .list_users()
        .await
        .map(web::Json)
        .map_err(|err| at_boundary(err, |_| "Error fetching users".to_owned()))
}

/// Merge a partial update into one user. Unknown ids are not an error.
#[utoipa::path(
    patch,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    request_body = crate::inbound::http::schemas::UserPatchSchema,
    responses(
        (status = 200, description = "User updated", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{userId}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPatch>,
) -> ApiResult<HttpResponse> {
    const FAILURE: &str = "Error updating user";
    let id = parse_user_id(&path, FAILURE)?;
    state
        .users
        .update(&id, payload.into_inner())
        .await
        .map_err(|err| at_boundary(err, |_| FAILURE.to_owned()))?;
    Ok(text(HttpResponse::Ok(), USER_UPDATED))
}

/// Delete one user. Unknown ids are not an error.
#[utoipa::path(
    delete,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{userId}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    const FAILURE: &str = "Error deleting user";
    let id = parse_user_id(&path, FAILURE)?;
    state
        .users
        .delete(&id)
        .await
        .map_err(|err| at_boundary(err, |_| FAILURE.to_owned()))?;
    Ok(text(HttpResponse::Ok(), USER_DELETED))
}
