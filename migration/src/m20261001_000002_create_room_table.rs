use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string(Room::Name))
                    .col(string(Room::Type))
                    .col(big_integer(Room::Price))
                    .col(string(Room::Status).default("available"))
                    .col(integer(Room::ProjectId))
                    .col(text_null(Room::Description))
                    .col(text(Room::Amenities).default("[]"))
                    .col(text(Room::Images).default("[]"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_project_id")
                            .from(Room::Table, Room::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_project_id")
                    .table(Room::Table)
                    .col(Room::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    Name,
    Type,
    Price,
    Status,
    ProjectId,
    Description,
    Amenities,
    Images,
}
