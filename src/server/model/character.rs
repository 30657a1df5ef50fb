//! Character domain model.

use crate::model::character::CharacterDto;

/// Character from the dataset, optionally linked to a home planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub description: Option<String>,
    pub name: String,
    pub gender: String,
    pub birth_year: i32,
    pub mass: i32,
    pub height: i32,
    pub skin_color: String,
    pub eye_color: String,
    /// Home planet, if any. Serialized as the flat foreign key.
    pub planet_id: Option<i32>,
}

impl Character {
    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            description: self.description,
            name: self.name,
            gender: self.gender,
            birth_year: self.birth_year,
            mass: self.mass,
            height: self.height,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            planet_id: self.planet_id,
        }
    }

    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            name: entity.name,
            gender: entity.gender,
            birth_year: entity.birth_year,
            mass: entity.mass,
            height: entity.height,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
            planet_id: entity.planet_id,
        }
    }
}
