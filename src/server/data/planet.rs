//! Planet data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::planet::Planet;

/// Repository providing database operations for planets.
///
/// Planets are read-only from the API's perspective; rows are seeded through
/// migrations or external tooling.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlanetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planet records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find().all(self.db).await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by its id.
    ///
    /// # Arguments
    /// - `planet_id` - Primary key of the planet
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, planet_id: i32) -> Result<Option<Planet>, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?;

        Ok(planet.map(Planet::from_entity))
    }
}
