//! Planet service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

/// Service providing business logic for planet queries.
pub struct PlanetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new PlanetService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlanetService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all planets.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planets in the dataset
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_planets(&self) -> Result<Vec<Planet>, AppError> {
        let planet_repo = PlanetRepository::new(self.db);
        let planets = planet_repo.get_all().await?;

        Ok(planets)
    }

    /// Retrieves a planet by id.
    ///
    /// # Arguments
    /// - `planet_id` - Primary key of the planet to look up
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<Planet>, AppError> {
        let planet_repo = PlanetRepository::new(self.db);
        let planet = planet_repo.find_by_id(planet_id).await?;

        Ok(planet)
    }
}
