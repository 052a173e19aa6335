//! Domain core: the user account model, identifier resolution, and
//! transport-agnostic errors.
//!
//! Nothing in this module knows about HTTP or SQL. Inbound adapters map
//! [`DomainError`] values onto wire responses; outbound adapters implement
//! the ports defined under [`ports`].

pub mod error;
pub mod ports;
pub mod user;

pub use error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use user::{ParseUserTypeError, UserAccount, UserDraft, UserId, UserKey, UserType};
