//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Implements the [`crate::domain::ports::UserRepository`] port against
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain types; no business logic lives here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Bounded calls**: every operation runs under a fixed timeout so a hung
//!   backend cannot stall a request.
//! - **Typed errors**: driver failures map to `UserStoreError` variants,
//!   with unique-constraint violations classified separately.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::{DieselUserRepository, STORE_CALL_TIMEOUT};
pub use pool::{DbPool, PoolConfig, PoolError};
