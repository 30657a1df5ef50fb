use super::*;

/// Tests fetching a character by id.
///
/// Verifies that the repository returns the full domain model for an existing
/// character, with the home planet exposed as the flat foreign key.
///
/// Expected: Ok with the matching character
#[tokio::test]
async fn returns_character_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::create_planet(db).await?;
    let character = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .gender("male")
        .birth_year(19)
        .mass(77)
        .height(172)
        .skin_color("fair")
        .eye_color("blue")
        .planet_id(planet.id)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_id(character.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Luke Skywalker");
    assert_eq!(found.gender, "male");
    assert_eq!(found.birth_year, 19);
    assert_eq!(found.mass, 77);
    assert_eq!(found.height, 172);
    assert_eq!(found.skin_color, "fair");
    assert_eq!(found.eye_color, "blue");
    assert_eq!(found.planet_id, Some(planet.id));

    Ok(())
}

/// Tests fetching a character without a home planet.
///
/// Expected: Ok with planet_id None
#[tokio::test]
async fn returns_character_without_home_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_id(character.id).await?;

    assert!(found.is_some());
    assert!(found.unwrap().planet_id.is_none());

    Ok(())
}

/// Tests fetching a character by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_character_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
