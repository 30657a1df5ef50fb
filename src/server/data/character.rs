//! Character data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::character::Character;

/// Repository providing database operations for characters.
///
/// Characters are read-only from the API's perspective; rows are seeded through
/// migrations or external tooling.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all characters.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All character records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let characters = entity::prelude::Character::find().all(self.db).await?;

        Ok(characters.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by its id.
    ///
    /// # Arguments
    /// - `character_id` - Primary key of the character
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, character_id: i32) -> Result<Option<Character>, DbErr> {
        let character = entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?;

        Ok(character.map(Character::from_entity))
    }
}
