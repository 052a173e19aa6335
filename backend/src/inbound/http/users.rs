//! User account API handlers.
//!
//! ```text
//! GET    /users              list accounts
//! GET    /users/{identifier} fetch by id or email
//! POST   /users              create
//! PUT    /users/{id}         full replace
//! DELETE /users/{id}         remove
//! ```
//!
//! The `{identifier}` segment of the read route is dual-mode: a segment that
//! parses as an `i32` addresses the surrogate key, anything else is treated
//! as an email address (see [`UserKey`]).

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::UserStoreError;
use crate::domain::{DomainError, UserAccount, UserDraft, UserId, UserKey, UserType};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Fixed message for misses on the read path and zero-row mutations.
const USER_NOT_FOUND: &str = "User not found";
/// Fixed message for email uniqueness conflicts.
const EMAIL_IN_USE: &str = "Email already in use";

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// String fields default to empty when omitted (a full replace overwrites
/// them with the submitted values, empty included); `user_type` must be one
/// of the enumerated roles.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email, unique across accounts.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
    /// Role category.
    pub user_type: UserType,
    /// Postal address.
    #[serde(default)]
    pub address: String,
}

impl From<UserInput> for UserDraft {
    fn from(value: UserInput) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            user_type: value.user_type,
            address: value.address,
        }
    }
}

/// Wire form of a persisted account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned surrogate key.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Role category.
    pub user_type: UserType,
    /// Postal address.
    pub address: String,
}

impl From<UserAccount> for UserResponse {
    fn from(value: UserAccount) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            user_type: value.user_type,
            address: value.address,
        }
    }
}

/// Map store failures onto the HTTP contract.
///
/// Unique-violation becomes the fixed conflict message; everything else is a
/// server error carrying the store's text verbatim.
fn map_store_error(error: UserStoreError) -> DomainError {
    match error {
        UserStoreError::DuplicateEmail => DomainError::invalid_request(EMAIL_IN_USE),
        other => DomainError::internal(other.to_string()),
    }
}

/// Parse a path segment that must be a surrogate key.
fn parse_id_segment(segment: &str) -> Result<UserId, DomainError> {
    segment
        .parse::<i32>()
        .map(UserId::new)
        .map_err(|err| DomainError::invalid_request(err.to_string()))
}

/// List all user accounts.
///
/// An empty store yields an empty JSON array, never null.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All accounts, ordered by id", body = [UserResponse]),
        (status = 500, description = "Store failure", body = crate::inbound::http::error::ApiError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let accounts = state.users.list_all().await.map_err(map_store_error)?;

    Ok(web::Json(
        accounts.into_iter().map(UserResponse::from).collect(),
    ))
}

/// Fetch one account by id or email.
#[utoipa::path(
    get,
    path = "/users/{identifier}",
    params(
        ("identifier" = String, Path, description = "Surrogate key if it parses as an integer, email address otherwise")
    ),
    responses(
        (status = 200, description = "Matching account", body = UserResponse),
        (status = 404, description = "No matching account", body = crate::inbound::http::error::ApiError),
        (status = 500, description = "Store failure", body = crate::inbound::http::error::ApiError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{identifier}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    identifier: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let found = match UserKey::resolve(&identifier) {
        UserKey::Id(id) => state.users.find_by_id(id).await,
        UserKey::Email(email) => state.users.find_by_email(&email).await,
    }
    .map_err(map_store_error)?;

    let account = found.ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(UserResponse::from(account)))
}

/// Create a new account.
///
/// The advisory email pre-check serves the common duplicate case; the
/// store's unique constraint closes the check-then-insert race and maps to
/// the same conflict response. A failed pre-check aborts the request rather
/// than letting the insert proceed blind.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserInput,
    responses(
        (status = 201, description = "Created account including the assigned id", body = UserResponse),
        (status = 400, description = "Malformed body or email already in use", body = crate::inbound::http::error::ApiError),
        (status = 500, description = "Store failure", body = crate::inbound::http::error::ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserInput>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::from(payload.into_inner());

    let existing = state
        .users
        .find_by_email(&draft.email)
        .await
        .map_err(map_store_error)?;
    if existing.is_some() {
        return Err(DomainError::invalid_request(EMAIL_IN_USE).into());
    }

    let created = state.users.insert(&draft).await.map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Replace every attribute of an existing account.
///
/// Success deliberately answers `201 Created` with an empty body, preserving
/// the service's long-standing contract for this route.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Surrogate key")),
    request_body = UserInput,
    responses(
        (status = 201, description = "Account replaced"),
        (status = 400, description = "Malformed id or body", body = crate::inbound::http::error::ApiError),
        (status = 404, description = "No account with that id", body = crate::inbound::http::error::ApiError),
        (status = 500, description = "Store failure", body = crate::inbound::http::error::ApiError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UserInput>,
) -> ApiResult<HttpResponse> {
    let id = parse_id_segment(&id)?;
    let draft = UserDraft::from(payload.into_inner());

    let affected = state
        .users
        .update(id, &draft)
        .await
        .map_err(map_store_error)?;
    if affected == 0 {
        return Err(DomainError::not_found(USER_NOT_FOUND).into());
    }

    Ok(HttpResponse::Created().finish())
}

/// Delete an account by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Surrogate key")),
    responses(
        (status = 204, description = "Account removed"),
        (status = 400, description = "Malformed id", body = crate::inbound::http::error::ApiError),
        (status = 404, description = "No account with that id", body = crate::inbound::http::error::ApiError),
        (status = 500, description = "Store failure", body = crate::inbound::http::error::ApiError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id_segment(&id)?;

    let affected = state.users.delete(id).await.map_err(map_store_error)?;
    if affected == 0 {
        return Err(DomainError::not_found(USER_NOT_FOUND).into());
    }

    Ok(HttpResponse::NoContent().finish())
}
