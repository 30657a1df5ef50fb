use serde::{Deserialize, Serialize};

/// Character as exposed on the wire. Carries the flat `planet_id` foreign key
/// rather than an expanded planet object.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub description: Option<String>,
    pub name: String,
    pub gender: String,
    pub birth_year: i32,
    pub mass: i32,
    pub height: i32,
    pub skin_color: String,
    pub eye_color: String,
    pub planet_id: Option<i32>,
}
