//! Favorite factory for creating test favorite entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite linking a user to a name.
///
/// Favorites carry a denormalized entity name rather than a typed reference, so
/// the factory takes the owning user's id and the name directly. The referenced
/// user must already exist when foreign keys are enforced.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user
/// - `name` - Name of the favorited planet or character
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate `(user_id, name)` pair)
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    name: impl Into<String>,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        name: ActiveValue::Set(name.into()),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
