//! Character service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

/// Service providing business logic for character queries.
pub struct CharacterService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all characters.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All characters in the dataset
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_characters(&self) -> Result<Vec<Character>, AppError> {
        let character_repo = CharacterRepository::new(self.db);
        let characters = character_repo.get_all().await?;

        Ok(characters)
    }

    /// Retrieves a character by id.
    ///
    /// # Arguments
    /// - `character_id` - Primary key of the character to look up
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_character(&self, character_id: i32) -> Result<Option<Character>, AppError> {
        let character_repo = CharacterRepository::new(self.db);
        let character = character_repo.find_by_id(character_id).await?;

        Ok(character)
    }
}
