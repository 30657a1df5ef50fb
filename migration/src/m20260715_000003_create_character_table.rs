use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000002_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_null(Character::Description, 300))
                    .col(string_len(Character::Name, 50))
                    .col(string_len(Character::Gender, 50))
                    .col(integer(Character::BirthYear))
                    .col(integer(Character::Mass))
                    .col(integer(Character::Height))
                    .col(string_len(Character::SkinColor, 10))
                    .col(string_len(Character::EyeColor, 10))
                    .col(integer_null(Character::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_planet_id")
                            .from(Character::Table, Character::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Description,
    Name,
    Gender,
    BirthYear,
    Mass,
    Height,
    SkinColor,
    EyeColor,
    PlanetId,
}
