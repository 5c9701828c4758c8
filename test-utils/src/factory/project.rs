//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// Defaults come from `fixture::project` with a unique slug and name per call.
///
/// # Example
///
/// ```rust,ignore
/// let project = ProjectFactory::new(&db)
///     .slug("riverside")
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::project::Model,
}

impl<'a> ProjectFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::project::entity_builder()
            .name(format!("Homestay {}", id))
            .slug(format!("homestay-{}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.entity.is_featured = is_featured;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.entity.tags = tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.entity.kind = kind.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            slug: ActiveValue::Set(self.entity.slug),
            slogan: ActiveValue::Set(self.entity.slogan),
            description: ActiveValue::Set(self.entity.description),
            airbnb_url: ActiveValue::Set(self.entity.airbnb_url),
            is_featured: ActiveValue::Set(self.entity.is_featured),
            tags: ActiveValue::Set(self.entity.tags),
            images: ActiveValue::Set(self.entity.images),
            kind: ActiveValue::Set(self.entity.kind),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values and a unique slug.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_projects_with_unique_slugs() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Project).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_project(db).await?;
        let second = create_project(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);

        Ok(())
    }

    #[tokio::test]
    async fn creates_project_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Project).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let project = ProjectFactory::new(db)
            .slug("custom-villa")
            .kind("villa")
            .featured(true)
            .tags(&["Pool"])
            .build()
            .await?;

        assert_eq!(project.slug, "custom-villa");
        assert_eq!(project.kind, "villa");
        assert!(project.is_featured);
        assert_eq!(project.tags.0, vec!["Pool".to_string()]);

        Ok(())
    }
}
