use super::*;

/// Tests creating a new favorite.
///
/// Verifies that the repository inserts a favorite for the given user and name
/// and returns the persisted domain model.
///
/// Expected: Ok with favorite created
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(CreateFavoriteParam {
            user_id: user.id,
            name: "Tatooine".to_string(),
        })
        .await?;

    assert_eq!(favorite.name, "Tatooine");
    assert_eq!(favorite.user_id, user.id);

    // Verify favorite exists in database
    let db_favorite = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?;
    assert!(db_favorite.is_some());
    assert_eq!(db_favorite.unwrap().name, "Tatooine");

    Ok(())
}

/// Tests that the storage layer rejects a duplicate `(user_id, name)` pair.
///
/// The unique index is the only guard against duplicate favorites, including
/// under concurrent requests, so the second insert must fail at the database.
///
/// Expected: Err on the second insert, exactly one row remains
#[tokio::test]
async fn rejects_duplicate_user_name_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(CreateFavoriteParam {
        user_id: user.id,
        name: "Tatooine".to_string(),
    })
    .await?;

    let duplicate = repo
        .create(CreateFavoriteParam {
            user_id: user.id,
            name: "Tatooine".to_string(),
        })
        .await;

    assert!(duplicate.is_err());

    let count = entity::prelude::Favorite::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that two users can favorite the same name.
///
/// Uniqueness is scoped to the owning user, not global.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_name_for_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::user::create_user(db).await?;
    let user2 = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite1 = repo
        .create(CreateFavoriteParam {
            user_id: user1.id,
            name: "Tatooine".to_string(),
        })
        .await?;
    let favorite2 = repo
        .create(CreateFavoriteParam {
            user_id: user2.id,
            name: "Tatooine".to_string(),
        })
        .await?;

    assert_ne!(favorite1.id, favorite2.id);
    assert_eq!(favorite1.name, favorite2.name);

    Ok(())
}
