//! User account data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Surrogate key assigned by the store on insertion.
///
/// Identifiers are immutable once assigned; the store is the only party that
/// mints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw key value.
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw key value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role category assigned to an account.
///
/// The set is closed; unknown values fail deserialization and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Full administrative access.
    Admin,
    /// Internal operator account.
    Staff,
    /// Regular end-user account.
    Customer,
}

impl UserType {
    /// Canonical lowercase form, as persisted by the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUserTypeError {
    value: String,
}

impl fmt::Display for ParseUserTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown user type {:?}; expected admin, staff, or customer",
            self.value
        )
    }
}

impl std::error::Error for ParseUserTypeError {}

impl FromStr for UserType {
    type Err = ParseUserTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "customer" => Ok(Self::Customer),
            other => Err(ParseUserTypeError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Persisted user account record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `email` is unique across all accounts (enforced by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Store-assigned surrogate key.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, unique across accounts.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Role category.
    pub user_type: UserType,
    /// Postal address.
    pub address: String,
}

/// Request-scoped parameters for creating or fully replacing an account.
///
/// Carries the same attributes as [`UserAccount`] minus the identity. Drafts
/// are never persisted directly; they only parameterize store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
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

impl UserDraft {
    /// Apply the draft to an existing identity, producing the replaced record.
    pub fn into_account(self, id: UserId) -> UserAccount {
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            user_type: self.user_type,
            address: self.address,
        }
    }
}

/// Resolved lookup key for the dual-mode `GET /users/{identifier}` route.
///
/// A path segment that parses as an `i32` addresses an account by surrogate
/// key; anything else is taken verbatim as an email address. This is a
/// deliberate tagged dispatch, not an error condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    /// Lookup by surrogate key.
    Id(UserId),
    /// Lookup by email address.
    Email(String),
}

impl UserKey {
    /// Resolve an untyped path segment into a lookup key.
    pub fn resolve(segment: &str) -> Self {
        match segment.parse::<i32>() {
            Ok(id) => Self::Id(UserId::new(id)),
            Err(_) => Self::Email(segment.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7", UserKey::Id(UserId::new(7)))]
    #[case("-3", UserKey::Id(UserId::new(-3)))]
    #[case("+12", UserKey::Id(UserId::new(12)))]
    #[case("ada@example.com", UserKey::Email("ada@example.com".to_owned()))]
    #[case("12abc", UserKey::Email("12abc".to_owned()))]
    #[case("", UserKey::Email(String::new()))]
    fn resolve_dispatches_on_integer_parse(#[case] segment: &str, #[case] expected: UserKey) {
        assert_eq!(UserKey::resolve(segment), expected);
    }

    #[test]
    fn resolve_treats_out_of_range_numbers_as_email() {
        // 2^31 does not fit an i32, so the segment falls through to the
        // email branch and misses by lookup rather than by parse failure.
        let key = UserKey::resolve("2147483648");
        assert_eq!(key, UserKey::Email("2147483648".to_owned()));
    }

    #[rstest]
    #[case(UserType::Admin, "admin")]
    #[case(UserType::Staff, "staff")]
    #[case(UserType::Customer, "customer")]
    fn user_type_round_trips_through_canonical_form(
        #[case] user_type: UserType,
        #[case] text: &str,
    ) {
        assert_eq!(user_type.as_str(), text);
        assert_eq!(text.parse::<UserType>(), Ok(user_type));
    }

    #[test]
    fn unknown_user_type_reports_the_offending_value() {
        let err = "wizard".parse::<UserType>().expect_err("unknown role");
        assert!(err.to_string().contains("wizard"));
    }

    #[test]
    fn draft_into_account_preserves_every_field() {
        let draft = UserDraft {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            phone_number: "555-0100".to_owned(),
            user_type: UserType::Staff,
            address: "12 Analytical Row".to_owned(),
        };

        let account = draft.clone().into_account(UserId::new(4));

        assert_eq!(account.id, UserId::new(4));
        assert_eq!(account.name, draft.name);
        assert_eq!(account.email, draft.email);
        assert_eq!(account.phone_number, draft.phone_number);
        assert_eq!(account.user_type, draft.user_type);
        assert_eq!(account.address, draft.address);
    }
}
