use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{error::AppError, service::planet::PlanetService, state::AppState},
};

pub static PLANETS_TAG: &str = "planets";

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANETS_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planet_service = PlanetService::new(&state.db);
    let planets = planet_service.get_planets().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Get one planet by id
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANETS_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to fetch")
    ),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service
        .get_planet(planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
