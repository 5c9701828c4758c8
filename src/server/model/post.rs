//! Domain & parameter models for blog posts

use chrono::{DateTime, Utc};

use crate::model::{
    post::{CreatePostDto, PostDto, UpdatePostDto},
    validate::clear_if_blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            content: entity.content,
            category: entity.category,
            image_url: entity.image_url,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            category: self.category,
            image_url: self.image_url,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
}

impl From<CreatePostDto> for CreatePostParams {
    fn from(dto: CreatePostDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            slug: dto.slug.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            category: dto.category,
            image_url: dto.image_url,
            author: dto.author,
        }
    }
}

/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub category: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub author: Option<Option<String>>,
}

impl From<UpdatePostDto> for UpdatePostParams {
    fn from(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            content: dto.content,
            category: dto.category.map(Some),
            image_url: clear_if_blank(dto.image_url),
            author: dto.author.map(Some),
        }
    }
}
