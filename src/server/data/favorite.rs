//! Favorite data repository for database operations.
//!
//! This module provides the `FavoriteRepository` for managing favorite records, the
//! only entity the API mutates. Lookups are keyed by the owning user and the
//! denormalized entity name; duplicate `(user_id, name)` pairs are rejected by the
//! storage layer's unique index.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::favorite::{CreateFavoriteParam, Favorite};

/// Repository providing database operations for favorites.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and deleting favorite records.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new favorite record.
    ///
    /// The storage layer enforces uniqueness of `(user_id, name)`; inserting a
    /// duplicate pair fails with a database error, which the service layer is
    /// responsible for absorbing.
    ///
    /// # Arguments
    /// - `param` - Owning user id and favorited entity name
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite record
    /// - `Err(DbErr)` - Database error during insert (constraint violation, etc.)
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            name: ActiveValue::Set(param.name),
            user_id: ActiveValue::Set(param.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Gets all favorites owned by a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites for the user, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let favorites = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(favorites.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds a user's favorite by the favorited entity's name.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    /// - `name` - Name of the favorited planet or character
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The favorite if found
    /// - `Ok(None)` - No favorite with that name for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<Favorite>, DbErr> {
        let favorite = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(favorite.map(Favorite::from_entity))
    }

    /// Deletes a favorite by its id.
    ///
    /// # Arguments
    /// - `favorite_id` - Primary key of the favorite to remove
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted (or no row matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_id(&self, favorite_id: i32) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
