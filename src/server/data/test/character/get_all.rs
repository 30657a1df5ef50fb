use super::*;

/// Tests listing characters when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_characters_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert!(characters.is_empty());

    Ok(())
}

/// Tests listing all characters.
///
/// Expected: Ok with both characters present
#[tokio::test]
async fn returns_all_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character1 = factory::character::create_character(db).await?;
    let character2 = factory::character::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert_eq!(characters.len(), 2);

    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&character1.name.as_str()));
    assert!(names.contains(&character2.name.as_str()));

    Ok(())
}
