//! User account service library modules.
//!
//! Layered hexagonally: `domain` holds the model and ports, `inbound` the
//! HTTP adapter, `outbound` the PostgreSQL adapter, `middleware` the
//! cross-cutting trace layer.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
