use holocron::server::controller::planet::get_planet_by_id;

use super::*;

/// Tests fetching an existing planet by id.
///
/// Verifies the serialized shape, including the legacy `descriptcion` field
/// spelling existing consumers depend on.
///
/// Expected: Ok with 200 OK response and the legacy field name present
#[tokio::test]
async fn success_returns_planet_with_legacy_description_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .description("Peaceful and green")
        .build()
        .await?;

    let result = get_planet_by_id(State(app_state_for(db, 1)), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let object = body.as_object().unwrap();

    assert_eq!(object["name"], "Alderaan");
    assert_eq!(object["descriptcion"], "Peaceful and green");
    assert!(!object.contains_key("description"));

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and message body
#[tokio::test]
async fn not_found_when_planet_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = get_planet_by_id(State(app_state_for(db, 1)), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Planet not found");

    Ok(())
}
