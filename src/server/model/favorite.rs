//! Favorite domain model and parameters.
//!
//! A favorite links a user to a planet or character by the entity's name rather
//! than a typed reference. The `(user_id, name)` pair is unique at the storage
//! layer, which is the only guard against duplicate favorites under concurrent
//! requests.

use crate::model::favorite::FavoriteDto;

/// Named link from a user to a favorited planet or character.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    /// Denormalized copy of the favorited entity's name.
    pub name: String,
    /// Id of the owning user.
    pub user_id: i32,
}

impl Favorite {
    /// Converts the favorite domain model to a DTO for API responses.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            name: self.name,
            user_id: self.user_id,
        }
    }

    /// Converts an entity model to a favorite domain model at the repository boundary.
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            user_id: entity.user_id,
        }
    }
}

/// Parameters for creating a favorite on behalf of a user.
#[derive(Debug, Clone)]
pub struct CreateFavoriteParam {
    /// Id of the user the favorite is created for.
    pub user_id: i32,
    /// Name of the favorited planet or character.
    pub name: String,
}
