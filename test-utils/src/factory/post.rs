//! Blog post factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test blog posts with unique slugs.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    minutes_ago: i64,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            minutes_ago: 0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Backdates the post's creation time.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.minutes_ago = minutes;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set("Post content".to_string()),
            category: ActiveValue::Set(Some("Travel guide".to_string())),
            image_url: ActiveValue::Set(None),
            author: ActiveValue::Set(Some("Test Author".to_string())),
            created_at: ActiveValue::Set(Utc::now() - Duration::minutes(self.minutes_ago)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values and a unique slug.
pub async fn create_post(db: &DatabaseConnection) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db).build().await
}
