//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migration SQL under `migrations/`
//! exactly; Diesel uses them for compile-time query validation and type-safe
//! SQL generation.

diesel::table! {
    /// User accounts table.
    ///
    /// The `id` column is a serial primary key assigned on insertion; the
    /// `email` column carries a UNIQUE constraint (`users_email_key`).
    users (id) {
        /// Primary key: store-assigned serial.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Contact email, unique across accounts.
        email -> Varchar,
        /// Contact phone number.
        phone_number -> Varchar,
        /// Role category in canonical lowercase form.
        user_type -> Varchar,
        /// Postal address.
        address -> Varchar,
    }
}
