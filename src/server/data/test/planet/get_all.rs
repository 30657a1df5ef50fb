use super::*;

/// Tests listing planets when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_planets_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}

/// Tests listing all planets.
///
/// Expected: Ok with both planets present
#[tokio::test]
async fn returns_all_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet1 = factory::planet::create_planet(db).await?;
    let planet2 = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    assert_eq!(planets.len(), 2);

    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&planet1.name.as_str()));
    assert!(names.contains(&planet2.name.as_str()));

    Ok(())
}
