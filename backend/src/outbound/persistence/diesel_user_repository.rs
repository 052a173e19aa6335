//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Every operation runs under [`STORE_CALL_TIMEOUT`] so a hung backend
//! surfaces as a store error instead of stalling the request. Unique
//! constraint violations are classified as [`UserStoreError::DuplicateEmail`]
//! so handlers can map the race the advisory pre-check cannot close.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{UserAccount, UserDraft, UserId};

use super::models::{NewUserRow, UserRow, UserRowChangeset, row_to_user};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Budget for a single store call.
pub const STORE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserStoreError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    UserStoreError::connection(message)
}

fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            debug!(
                message = info.message(),
                "unique constraint rejected the write"
            );
            UserStoreError::DuplicateEmail
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserStoreError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            UserStoreError::query(info.message().to_owned())
        }
        other => UserStoreError::query(other.to_string()),
    }
}

/// Run a store operation under the fixed per-call budget.
async fn bounded<T, F>(operation: F) -> Result<T, UserStoreError>
where
    F: Future<Output = Result<T, UserStoreError>>,
{
    match tokio::time::timeout(STORE_CALL_TIMEOUT, operation).await {
        Ok(outcome) => outcome,
        Err(_) => Err(UserStoreError::timeout(STORE_CALL_TIMEOUT.as_secs())),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_all(&self) -> Result<Vec<UserAccount>, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let rows = users::table
                .select(UserRow::as_select())
                .order(users::id.asc())
                .load::<UserRow>(&mut conn)
                .await
                .map_err(map_diesel_error)?;

            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let row = users::table
                .find(id.get())
                .select(UserRow::as_select())
                .first::<UserRow>(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let row = users::table
                .filter(users::email.eq(email))
                .select(UserRow::as_select())
                .first::<UserRow>(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn insert(&self, draft: &UserDraft) -> Result<UserAccount, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            let row = diesel::insert_into(users::table)
                .values(NewUserRow::from(draft))
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(&mut conn)
                .await
                .map_err(map_diesel_error)?;

            row_to_user(row)
        })
        .await
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            diesel::update(users::table.find(id.get()))
                .set(UserRowChangeset::from(draft))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserStoreError> {
        bounded(async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;

            diesel::delete(users::table.find(id.get()))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)
        })
        .await
    }
}
