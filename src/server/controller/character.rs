use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{error::AppError, service::character::CharacterService, state::AppState},
};

pub static PEOPLE_TAG: &str = "people";

/// Get all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let character_service = CharacterService::new(&state.db);
    let characters = character_service.get_characters().await?;

    let character_dtos: Vec<CharacterDto> =
        characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(character_dtos)))
}

/// Get one character by id
#[utoipa::path(
    get,
    path = "/people/{character_id}",
    tag = PEOPLE_TAG,
    params(
        ("character_id" = i32, Path, description = "Id of the character to fetch")
    ),
    responses(
        (status = 200, description = "The requested character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .get_character(character_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
