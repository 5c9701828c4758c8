use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::post::{CreatePostParams, Post, UpdatePostParams};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all posts, newest first
    pub async fn get_all(&self) -> Result<Vec<Post>, DbErr> {
        let posts = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(posts.into_iter().map(Post::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let post = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(post.map(Post::from_entity))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DbErr> {
        let post = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(post.map(Post::from_entity))
    }

    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let post = entity::post::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            content: ActiveValue::Set(params.content),
            category: ActiveValue::Set(params.category),
            image_url: ActiveValue::Set(params.image_url),
            author: ActiveValue::Set(params.author),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(post))
    }

    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let Some(post) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = post.into_active_model();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(author) = params.author {
            active_model.author = ActiveValue::Set(author);
        }

        let post = active_model.update(self.db).await?;

        Ok(Some(Post::from_entity(post)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Post::find().count(self.db).await
    }
}
