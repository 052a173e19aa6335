//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct aggregating the REST surface: the user
//! CRUD endpoints and the health probes, plus the wire schemas. The
//! generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::error::ErrorCode;
use crate::domain::user::UserType;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::users::{UserInput, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User account service API",
        description = "CRUD interface over user account records backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserInput, UserResponse, UserType, ApiError, ErrorCode)),
    tags(
        (name = "users", description = "Operations on user account records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
