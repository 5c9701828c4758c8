pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_project_table;
mod m20261001_000002_create_room_table;
mod m20261001_000003_create_service_table;
mod m20261001_000004_create_post_table;
mod m20261001_000005_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_project_table::Migration),
            Box::new(m20261001_000002_create_room_table::Migration),
            Box::new(m20261001_000003_create_service_table::Migration),
            Box::new(m20261001_000004_create_post_table::Migration),
            Box::new(m20261001_000005_create_message_table::Migration),
        ]
    }
}
