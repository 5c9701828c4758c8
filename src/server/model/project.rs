//! Domain & parameter models for project operations
//!
//! Defines the project domain model, its create and update parameter models,
//! and provides methods to convert the project domain model from entity and
//! into DTOs.

use crate::model::{
    project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    validate::clear_if_blank,
};

/// A homestay or villa listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub slogan: Option<String>,
    pub description: Option<String>,
    pub airbnb_url: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub kind: String,
}

impl Project {
    /// Converts an entity model to the project domain model
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            slogan: entity.slogan,
            description: entity.description,
            airbnb_url: entity.airbnb_url,
            is_featured: entity.is_featured,
            tags: entity.tags.into(),
            images: entity.images.into(),
            kind: entity.kind,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            slogan: self.slogan,
            description: self.description,
            airbnb_url: self.airbnb_url,
            is_featured: self.is_featured,
            tags: self.tags,
            images: self.images,
            kind: self.kind,
        }
    }
}

/// Parameters for creating a new project
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub slug: String,
    pub slogan: Option<String>,
    pub description: Option<String>,
    pub airbnb_url: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub kind: String,
}

/// Built from a DTO that has already passed validation, so required fields are present.
impl From<CreateProjectDto> for CreateProjectParams {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            slug: dto.slug.unwrap_or_default(),
            slogan: dto.slogan,
            description: dto.description,
            airbnb_url: dto.airbnb_url,
            is_featured: dto.is_featured,
            tags: dto.tags,
            images: dto.images,
            kind: dto.kind.unwrap_or_default(),
        }
    }
}

/// Parameters for updating an existing project
///
/// `None` leaves the stored value unchanged. Nullable columns take `Some(None)` to clear.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub slogan: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub airbnb_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub kind: Option<String>,
}

impl From<UpdateProjectDto> for UpdateProjectParams {
    fn from(dto: UpdateProjectDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            slogan: dto.slogan.map(Some),
            description: dto.description.map(Some),
            airbnb_url: clear_if_blank(dto.airbnb_url),
            is_featured: dto.is_featured,
            tags: dto.tags,
            images: dto.images,
            kind: dto.kind,
        }
    }
}
