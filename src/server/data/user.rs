//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records from the
//! database. Users are never created or mutated through the API, so the
//! repository only exposes queries, with entity-to-domain conversion at the
//! infrastructure boundary.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::user::User;

/// Repository providing database operations for users.
///
/// This struct holds a reference to the database connection and provides methods
/// for querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records, passwords dropped at conversion
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find().all(self.db).await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
