use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    // Legacy field spelling; existing consumers depend on it.
    #[serde(rename = "descriptcion")]
    pub description: Option<String>,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub terrain: String,
}
