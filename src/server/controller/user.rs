use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        error::AppError,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Get all users
///
/// Passwords are never included in the response.
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let users = user_service.get_users().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Get all favorites owned by a user
///
/// Returns 400 when the user has no favorites; this status is part of the
/// existing API contract.
#[utoipa::path(
    get,
    path = "/user/favorites/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user whose favorites to list")
    ),
    responses(
        (status = 200, description = "Favorites owned by the user", body = Vec<FavoriteDto>),
        (status = 400, description = "The user has no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorite_service = FavoriteService::new(&state.db);
    let favorites = favorite_service.get_user_favorites(user_id).await?;

    if favorites.is_empty() {
        return Err(AppError::BadRequest("Favorite not found".to_string()));
    }

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorite_dtos)))
}
