//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Provides a builder pattern for creating character entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    description: Option<String>,
    name: String,
    gender: String,
    birth_year: i32,
    mass: i32,
    height: i32,
    skin_color: String,
    eye_color: String,
    planet_id: Option<i32>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - description: `None`
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - gender: `"male"`
    /// - birth_year: `19`
    /// - mass: `77`
    /// - height: `172`
    /// - skin_color: `"fair"`
    /// - eye_color: `"blue"`
    /// - planet_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            description: None,
            name: format!("Character {}", id),
            gender: "male".to_string(),
            birth_year: 19,
            mass: 77,
            height: 172,
            skin_color: "fair".to_string(),
            eye_color: "blue".to_string(),
            planet_id: None,
        }
    }

    /// Sets the description for the character.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the name for the character.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the gender for the character.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the birth year for the character.
    pub fn birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Sets the mass for the character.
    pub fn mass(mut self, mass: i32) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the height for the character.
    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Sets the skin color for the character.
    pub fn skin_color(mut self, skin_color: impl Into<String>) -> Self {
        self.skin_color = skin_color.into();
        self
    }

    /// Sets the eye color for the character.
    pub fn eye_color(mut self, eye_color: impl Into<String>) -> Self {
        self.eye_color = eye_color.into();
        self
    }

    /// Sets the home planet for the character.
    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = Some(planet_id);
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            description: ActiveValue::Set(self.description),
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            birth_year: ActiveValue::Set(self.birth_year),
            mass: ActiveValue::Set(self.mass),
            height: ActiveValue::Set(self.height),
            skin_color: ActiveValue::Set(self.skin_color),
            eye_color: ActiveValue::Set(self.eye_color),
            planet_id: ActiveValue::Set(self.planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::character::Model)` - Created character entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
