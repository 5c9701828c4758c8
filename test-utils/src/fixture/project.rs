//! Project fixtures for creating in-memory test data.

use entity::{project, StringList};

/// Default test project name.
pub const DEFAULT_NAME: &str = "Test Homestay";

/// Default test project slug.
pub const DEFAULT_SLUG: &str = "test-homestay";

/// Default test project type.
pub const DEFAULT_KIND: &str = "homestay";

/// Creates a project entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Homestay"`
/// - slug: `"test-homestay"`
/// - slogan, description, airbnb_url: `None`
/// - is_featured: `false`
/// - tags, images: empty
/// - kind: `"homestay"`
pub fn entity() -> project::Model {
    entity_builder().build()
}

/// Creates a project entity builder for customization.
pub fn entity_builder() -> ProjectEntityBuilder {
    ProjectEntityBuilder::default()
}

/// Builder for creating customized project entity models.
pub struct ProjectEntityBuilder {
    id: i32,
    name: String,
    slug: String,
    slogan: Option<String>,
    description: Option<String>,
    airbnb_url: Option<String>,
    is_featured: bool,
    tags: Vec<String>,
    images: Vec<String>,
    kind: String,
}

impl Default for ProjectEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            slug: DEFAULT_SLUG.to_string(),
            slogan: None,
            description: None,
            airbnb_url: None,
            is_featured: false,
            tags: Vec::new(),
            images: Vec::new(),
            kind: DEFAULT_KIND.to_string(),
        }
    }
}

impl ProjectEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = Some(slogan.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn airbnb_url(mut self, url: impl Into<String>) -> Self {
        self.airbnb_url = Some(url.into());
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builds and returns the project entity model.
    pub fn build(self) -> project::Model {
        project::Model {
            id: self.id,
            name: self.name,
            slug: self.slug,
            slogan: self.slogan,
            description: self.description,
            airbnb_url: self.airbnb_url,
            is_featured: self.is_featured,
            tags: StringList(self.tags),
            images: StringList(self.images),
            kind: self.kind,
        }
    }
}
