use holocron::server::controller::favorite::delete_favorite_planet;

use super::*;

/// Tests unfavoriting a planet that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and message body
#[tokio::test]
async fn not_found_when_planet_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = delete_favorite_planet(State(app_state_for(db, user.id)), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Planet not found");

    Ok(())
}

/// Tests unfavoriting a planet the user never favorited.
///
/// A missing favorite has always surfaced as 500 on this route rather than
/// 404; the status is preserved, and the request must complete without an
/// unhandled fault.
///
/// Expected: Ok carrying a 500 INTERNAL_SERVER_ERROR response with message body
#[tokio::test]
async fn internal_error_when_favorite_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let planet = factory::planet::create_planet(db).await?;

    let result = delete_favorite_planet(State(app_state_for(db, user.id)), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Favorite does not exist");

    Ok(())
}

/// Tests unfavoriting a planet the user has favorited.
///
/// The favorite is matched by the planet's current name and removed.
///
/// Expected: Ok with 200 OK response; the favorite row is gone
#[tokio::test]
async fn success_deletes_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let planet = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    factory::favorite::create_favorite(db, user.id, "Tatooine").await?;

    let result = delete_favorite_planet(State(app_state_for(db, user.id)), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["ok"], true);

    let favorites = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::UserId.eq(user.id))
        .all(db)
        .await?;
    assert!(favorites.is_empty());

    Ok(())
}
