//! Ports consumed by the inbound adapters.
//!
//! HTTP handlers depend only on the traits defined here; production backs
//! them with the Diesel adapters under `outbound::persistence`, while tests
//! use the deterministic in-memory implementation.

mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository, UserStoreError};
