//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService` for managing the favorite lifecycle:
//! lookups by owner, creation with the create-or-absence contract, and removal.
//! Favorites are the only entity the API mutates.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::favorite::{CreateFavoriteParam, Favorite},
};

/// Service providing business logic for the favorite lifecycle.
pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all favorites owned by a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites for the user, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites = favorite_repo.get_by_user_id(user_id).await?;

        Ok(favorites)
    }

    /// Finds a user's favorite by the favorited entity's name.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    /// - `name` - Name of the favorited planet or character
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The favorite if present
    /// - `Ok(None)` - The user has no favorite with that name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_favorite(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<Favorite>, AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite = favorite_repo.find_by_user_and_name(user_id, name).await?;

        Ok(favorite)
    }

    /// Creates a favorite, absorbing any storage failure.
    ///
    /// On success returns the persisted favorite. On any storage failure (duplicate
    /// `(user_id, name)` pair, missing referenced user, unreachable store) the cause
    /// is logged server-side and `None` is returned; callers must treat this as
    /// "creation failed, cause unspecified" and respond with a generic server error.
    ///
    /// # Arguments
    /// - `param` - Owning user id and favorited entity name
    ///
    /// # Returns
    /// - `Some(Favorite)` - The created favorite
    /// - `None` - Creation failed; the cause was logged, never exposed
    pub async fn create_favorite(&self, param: CreateFavoriteParam) -> Option<Favorite> {
        let favorite_repo = FavoriteRepository::new(self.db);

        match favorite_repo.create(param).await {
            Ok(favorite) => Some(favorite),
            Err(err) => {
                tracing::error!("Failed to create favorite: {}", err);
                None
            }
        }
    }

    /// Removes a favorite by its id.
    ///
    /// # Arguments
    /// - `favorite_id` - Primary key of the favorite to remove
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn remove_favorite(&self, favorite_id: i32) -> Result<(), AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);
        favorite_repo.delete_by_id(favorite_id).await?;

        Ok(())
    }
}
