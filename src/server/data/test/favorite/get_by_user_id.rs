use super::*;

/// Tests listing favorites for a user with none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_user_has_no_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests that only the requested user's favorites are returned.
///
/// Verifies owner scoping: favorites belonging to another user must not leak
/// into the listing.
///
/// Expected: Ok with only the first user's favorites
#[tokio::test]
async fn returns_only_favorites_for_requested_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::user::create_user(db).await?;
    let user2 = factory::user::create_user(db).await?;

    factory::favorite::create_favorite(db, user1.id, "Tatooine").await?;
    factory::favorite::create_favorite(db, user1.id, "Luke Skywalker").await?;
    factory::favorite::create_favorite(db, user2.id, "Alderaan").await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user_id(user1.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == user1.id));

    let names: Vec<&str> = favorites.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"Tatooine"));
    assert!(names.contains(&"Luke Skywalker"));

    Ok(())
}
