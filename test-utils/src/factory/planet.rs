//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// Provides a builder pattern for creating planet entities with default values
/// that can be overridden as needed for specific test scenarios.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    description: Option<String>,
    name: String,
    diameter: i32,
    rotation_period: i32,
    terrain: String,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - description: `None`
    /// - name: `"Planet {id}"` where id is auto-incremented
    /// - diameter: `10465`
    /// - rotation_period: `23`
    /// - terrain: `"desert"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlanetFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            description: None,
            name: format!("Planet {}", id),
            diameter: 10465,
            rotation_period: 23,
            terrain: "desert".to_string(),
        }
    }

    /// Sets the description for the planet.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the name for the planet.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the diameter for the planet.
    pub fn diameter(mut self, diameter: i32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the rotation period for the planet.
    pub fn rotation_period(mut self, rotation_period: i32) -> Self {
        self.rotation_period = rotation_period;
        self
    }

    /// Sets the terrain for the planet.
    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = terrain.into();
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            description: ActiveValue::Set(self.description),
            name: ActiveValue::Set(self.name),
            diameter: ActiveValue::Set(self.diameter),
            rotation_period: ActiveValue::Set(self.rotation_period),
            terrain: ActiveValue::Set(self.terrain),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
///
/// Shorthand for `PlanetFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::planet::Model)` - Created planet entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
