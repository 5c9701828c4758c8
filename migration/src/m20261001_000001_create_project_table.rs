use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(string_uniq(Project::Slug))
                    .col(string_null(Project::Slogan))
                    .col(text_null(Project::Description))
                    .col(string_null(Project::AirbnbUrl))
                    .col(boolean(Project::IsFeatured).default(false))
                    .col(text(Project::Tags).default("[]"))
                    .col(text(Project::Images).default("[]"))
                    .col(string(Project::Type))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    Name,
    Slug,
    Slogan,
    Description,
    AirbnbUrl,
    IsFeatured,
    Tags,
    Images,
    Type,
}
