//! Port abstraction for user account persistence and its errors.
//!
//! Absence of a row is never an error: lookups return `Ok(None)` and
//! mutations report affected-row counts, so every [`UserStoreError`] variant
//! is distinguishable from "not found" by construction.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{UserAccount, UserDraft, UserId};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established or was lost.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Underlying driver message.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Underlying driver message.
        message: String,
    },

    /// The bounded-duration call expired before the store answered.
    #[error("user store call timed out after {seconds}s")]
    Timeout {
        /// Configured call budget in seconds.
        seconds: u64,
    },

    /// An insert or update collided with the unique email constraint.
    #[error("email address is already registered")]
    DuplicateEmail,
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a timeout error for the given call budget.
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }
}

/// Typed operations against the relational store.
///
/// Every call made by a handler is bounded to a fixed per-call budget by the
/// adapter; a hung backend surfaces as [`UserStoreError::Timeout`] rather
/// than blocking the request.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all accounts ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<UserAccount>, UserStoreError>;

    /// Fetch one account by surrogate key.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, UserStoreError>;

    /// Fetch one account by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserStoreError>;

    /// Insert a new account; the store assigns the id and returns the
    /// persisted row.
    async fn insert(&self, draft: &UserDraft) -> Result<UserAccount, UserStoreError>;

    /// Replace every attribute of the account with the given id, returning
    /// the number of rows affected (zero when the id does not exist).
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserStoreError>;

    /// Delete the account with the given id, returning the number of rows
    /// affected (zero when the id does not exist).
    async fn delete(&self, id: UserId) -> Result<usize, UserStoreError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    rows: Vec<UserAccount>,
    next_id: i32,
}

/// Deterministic in-memory [`UserRepository`] used by tests and local
/// development without a database.
///
/// Mirrors the store contract: sequential id assignment starting at 1,
/// unique-email enforcement on insert, affected-row counts from mutations.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, UserStoreError> {
        self.state
            .lock()
            .map_err(|_| UserStoreError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<UserAccount>, UserStoreError> {
        let state = self.lock()?;
        let mut rows = state.rows.clone();
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, UserStoreError> {
        let state = self.lock()?;
        Ok(state.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserStoreError> {
        let state = self.lock()?;
        Ok(state.rows.iter().find(|row| row.email == email).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<UserAccount, UserStoreError> {
        let mut state = self.lock()?;
        if state.rows.iter().any(|row| row.email == draft.email) {
            return Err(UserStoreError::DuplicateEmail);
        }

        state.next_id += 1;
        let account = draft.clone().into_account(UserId::new(state.next_id));
        state.rows.push(account.clone());
        Ok(account)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<usize, UserStoreError> {
        let mut state = self.lock()?;
        // The unique constraint also guards updates that steal another
        // account's email, exactly as the backing store would.
        if state
            .rows
            .iter()
            .any(|row| row.id != id && row.email == draft.email)
        {
            return Err(UserStoreError::DuplicateEmail);
        }

        match state.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                *row = draft.clone().into_account(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserStoreError> {
        let mut state = self.lock()?;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        Ok(before - state.rows.len())
    }
}
