use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// Informational response for favorite operations that don't return a resource
/// (already-exists on create, confirmation on delete).
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AckDto {
    pub ok: bool,
    pub message: String,
}

/// Directory of every registered route, served at the root path.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    pub routes: Vec<String>,
}
