use super::*;

/// Tests fetching a planet by id.
///
/// Verifies that the repository returns the full domain model for an existing
/// planet, including the optional description.
///
/// Expected: Ok with the matching planet
#[tokio::test]
async fn returns_planet_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .description("A harsh desert world")
        .diameter(10465)
        .rotation_period(23)
        .terrain("desert")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let found = repo.find_by_id(planet.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Tatooine");
    assert_eq!(found.description.as_deref(), Some("A harsh desert world"));
    assert_eq!(found.diameter, 10465);
    assert_eq!(found.rotation_period, 23);
    assert_eq!(found.terrain, "desert");

    Ok(())
}

/// Tests fetching a planet by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_planet_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
