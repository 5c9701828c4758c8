use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, room::RoomRepository},
    error::AppError,
    model::{
        project::{CreateProjectParams, Project, UpdateProjectParams},
        room::Room,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).get_all().await?)
    }

    /// Gets a project by its public slug
    ///
    /// # Returns
    /// - `Ok(Project)` - The matching project
    /// - `Err(AppError::NotFound)` - No project has this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", id)))
    }

    /// Gets the rooms of the project with the given slug
    pub async fn get_rooms(&self, slug: &str) -> Result<Vec<Room>, AppError> {
        let project = self.get_by_slug(slug).await?;

        Ok(RoomRepository::new(self.db)
            .get_by_project(project.id)
            .await?)
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        let project = ProjectRepository::new(self.db).create(params).await?;

        tracing::debug!("Created project {} ({})", project.id, project.slug);

        Ok(project)
    }

    pub async fn update(&self, id: i32, params: UpdateProjectParams) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Project with id {} not found",
                id
            )));
        }

        tracing::debug!("Deleted project {}", id);

        Ok(())
    }
}
