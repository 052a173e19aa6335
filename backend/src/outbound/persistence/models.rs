//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::ports::UserStoreError;
use crate::domain::{UserAccount, UserDraft, UserId, UserType};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub user_type: String,
    pub address: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub user_type: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone_number: &draft.phone_number,
            user_type: draft.user_type.as_str(),
            address: &draft.address,
        }
    }
}

/// Changeset struct replacing every mutable column of a user record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserRowChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub user_type: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a UserDraft> for UserRowChangeset<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone_number: &draft.phone_number,
            user_type: draft.user_type.as_str(),
            address: &draft.address,
        }
    }
}

/// Convert a database row into the domain account.
///
/// An unrecognized `user_type` value means the row predates the current
/// enumeration or was written out-of-band; surface it as a query error
/// rather than guessing a role.
pub(crate) fn row_to_user(row: UserRow) -> Result<UserAccount, UserStoreError> {
    let user_type = row
        .user_type
        .parse::<UserType>()
        .map_err(|err| UserStoreError::query(err.to_string()))?;

    Ok(UserAccount {
        id: UserId::new(row.id),
        name: row.name,
        email: row.email,
        phone_number: row.phone_number,
        user_type,
        address: row.address,
    })
}
