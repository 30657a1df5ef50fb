//! Planet domain model.

use crate::model::planet::PlanetDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub description: Option<String>,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub terrain: String,
}

impl Planet {
    /// Converts the planet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            description: self.description,
            name: self.name,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            terrain: self.terrain,
        }
    }

    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            name: entity.name,
            diameter: entity.diameter,
            rotation_period: entity.rotation_period,
            terrain: entity.terrain,
        }
    }
}
