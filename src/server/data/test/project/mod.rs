use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, UpdateProjectParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, project::ProjectFactory},
};

mod create;
mod delete;
mod get;
mod update;

fn create_params(slug: &str) -> CreateProjectParams {
    CreateProjectParams {
        name: "Riverside Villa".to_string(),
        slug: slug.to_string(),
        slogan: Some("Slow days by the river".to_string()),
        description: None,
        airbnb_url: Some("https://airbnb.com/rooms/1".to_string()),
        is_featured: true,
        tags: vec!["Pool".to_string(), "Garden".to_string()],
        images: vec!["https://images.example.com/villa.jpg".to_string()],
        kind: "villa".to_string(),
    }
}
