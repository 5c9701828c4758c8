use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::AppError,
    model::post::{CreatePostParams, Post, UpdatePostParams},
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
    }

    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        let post = PostRepository::new(self.db).create(params).await?;

        tracing::debug!("Created post {} ({})", post.id, post.slug);

        Ok(post)
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Post with id {} not found", id)));
        }

        Ok(())
    }
}
