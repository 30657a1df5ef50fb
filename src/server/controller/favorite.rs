use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AckDto, ErrorDto},
        favorite::FavoriteDto,
    },
    server::{
        error::AppError,
        model::favorite::CreateFavoriteParam,
        service::{
            character::CharacterService, favorite::FavoriteService, planet::PlanetService,
        },
        state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Favorite a planet for the current user
///
/// Creating the same favorite twice is reported as already-exists with 200
/// rather than an error, keeping the operation idempotent for clients.
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already exists", body = AckDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Favorite creation failed", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet_service = PlanetService::new(&state.db);
    let favorite_service = FavoriteService::new(&state.db);

    let planet = planet_service
        .get_planet(planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    let existing = favorite_service
        .find_favorite(state.current_user_id, &planet.name)
        .await?;

    if existing.is_some() {
        return Ok((
            StatusCode::OK,
            Json(AckDto {
                ok: true,
                message: "Favorite already exists".to_string(),
            }),
        )
            .into_response());
    }

    let param = CreateFavoriteParam {
        user_id: state.current_user_id,
        name: planet.name,
    };

    match favorite_service.create_favorite(param).await {
        Some(favorite) => Ok((StatusCode::CREATED, Json(favorite.into_dto())).into_response()),
        None => Err(AppError::InternalError(
            "Failed to create planet favorite".to_string(),
        )),
    }
}

/// Favorite a character for the current user
#[utoipa::path(
    post,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Id of the character to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already exists", body = AckDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Favorite creation failed", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character_service = CharacterService::new(&state.db);
    let favorite_service = FavoriteService::new(&state.db);

    let character = character_service
        .get_character(character_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    let existing = favorite_service
        .find_favorite(state.current_user_id, &character.name)
        .await?;

    if existing.is_some() {
        return Ok((
            StatusCode::OK,
            Json(AckDto {
                ok: true,
                message: "Favorite already exists".to_string(),
            }),
        )
            .into_response());
    }

    let param = CreateFavoriteParam {
        user_id: state.current_user_id,
        name: character.name,
    };

    match favorite_service.create_favorite(param).await {
        Some(favorite) => Ok((StatusCode::CREATED, Json(favorite.into_dto())).into_response()),
        None => Err(AppError::InternalError(
            "Failed to create character favorite".to_string(),
        )),
    }
}

/// Remove the current user's favorite for a planet
///
/// The favorite is matched by the planet's current name. A missing favorite has
/// always surfaced as 500 on this route; kept for compatibility.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = AckDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Favorite does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet_service = PlanetService::new(&state.db);
    let favorite_service = FavoriteService::new(&state.db);

    let planet = planet_service
        .get_planet(planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    let favorite = favorite_service
        .find_favorite(state.current_user_id, &planet.name)
        .await?;

    match favorite {
        Some(favorite) => {
            favorite_service.remove_favorite(favorite.id).await?;

            Ok((
                StatusCode::OK,
                Json(AckDto {
                    ok: true,
                    message: "Favorite deleted".to_string(),
                }),
            )
                .into_response())
        }
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Favorite does not exist".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Remove the current user's favorite for a character
///
/// The favorite is matched by the character's current name. A missing favorite
/// has always surfaced as 500 on this route; kept for compatibility.
#[utoipa::path(
    delete,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Id of the character to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = AckDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Favorite does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character_service = CharacterService::new(&state.db);
    let favorite_service = FavoriteService::new(&state.db);

    let character = character_service
        .get_character(character_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    let favorite = favorite_service
        .find_favorite(state.current_user_id, &character.name)
        .await?;

    match favorite {
        Some(favorite) => {
            favorite_service.remove_favorite(favorite.id).await?;

            Ok((
                StatusCode::OK,
                Json(AckDto {
                    ok: true,
                    message: "Favorite deleted".to_string(),
                }),
            )
                .into_response())
        }
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Favorite does not exist".to_string(),
            }),
        )
            .into_response()),
    }
}
