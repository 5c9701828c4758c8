use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::project::{CreateProjectParams, Project, UpdateProjectParams};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all projects ordered by id
    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let projects = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let project = entity::prelude::Project::find_by_id(id).one(self.db).await?;

        Ok(project.map(Project::from_entity))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, DbErr> {
        let project = entity::prelude::Project::find()
            .filter(entity::project::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(project.map(Project::from_entity))
    }

    /// Inserts a project and returns it with its generated id
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, DbErr> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            slogan: ActiveValue::Set(params.slogan),
            description: ActiveValue::Set(params.description),
            airbnb_url: ActiveValue::Set(params.airbnb_url),
            is_featured: ActiveValue::Set(params.is_featured),
            tags: ActiveValue::Set(params.tags.into()),
            images: ActiveValue::Set(params.images.into()),
            kind: ActiveValue::Set(params.kind),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(project))
    }

    /// Applies the provided fields to an existing project
    ///
    /// Returns `None` if no project has the given id.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = project.into_active_model();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(slogan) = params.slogan {
            active_model.slogan = ActiveValue::Set(slogan);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(airbnb_url) = params.airbnb_url {
            active_model.airbnb_url = ActiveValue::Set(airbnb_url);
        }
        if let Some(is_featured) = params.is_featured {
            active_model.is_featured = ActiveValue::Set(is_featured);
        }
        if let Some(tags) = params.tags {
            active_model.tags = ActiveValue::Set(tags.into());
        }
        if let Some(images) = params.images {
            active_model.images = ActiveValue::Set(images.into());
        }
        if let Some(kind) = params.kind {
            active_model.kind = ActiveValue::Set(kind);
        }

        let project = active_model.update(self.db).await?;

        Ok(Some(Project::from_entity(project)))
    }

    /// Deletes a project and, through the foreign key, its rooms
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Project::find().count(self.db).await
    }
}
