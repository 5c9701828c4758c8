//! Room fixtures for creating in-memory test data.

use entity::{
    room::{self, RoomStatus},
    StringList,
};

/// Default test room name.
pub const DEFAULT_NAME: &str = "Test Room";

/// Default test room type.
pub const DEFAULT_KIND: &str = "double";

/// Default nightly price.
pub const DEFAULT_PRICE: i64 = 1_000_000;

/// Default project ID the room belongs to.
pub const DEFAULT_PROJECT_ID: i32 = 1;

/// Creates a room entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Room"`
/// - kind: `"double"`
/// - price: `1_000_000`
/// - status: `RoomStatus::Available`
/// - project_id: `1`
/// - description: `None`
/// - amenities, images: empty
pub fn entity() -> room::Model {
    entity_builder().build()
}

/// Creates a room entity builder for customization.
pub fn entity_builder() -> RoomEntityBuilder {
    RoomEntityBuilder::default()
}

/// Builder for creating customized room entity models.
pub struct RoomEntityBuilder {
    id: i32,
    name: String,
    kind: String,
    price: i64,
    status: RoomStatus,
    project_id: i32,
    description: Option<String>,
    amenities: Vec<String>,
    images: Vec<String>,
}

impl Default for RoomEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            kind: DEFAULT_KIND.to_string(),
            price: DEFAULT_PRICE,
            status: RoomStatus::Available,
            project_id: DEFAULT_PROJECT_ID,
            description: None,
            amenities: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl RoomEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.amenities = amenities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|i| i.to_string()).collect();
        self
    }

    /// Builds and returns the room entity model.
    pub fn build(self) -> room::Model {
        room::Model {
            id: self.id,
            name: self.name,
            kind: self.kind,
            price: self.price,
            status: self.status,
            project_id: self.project_id,
            description: self.description,
            amenities: StringList(self.amenities),
            images: StringList(self.images),
        }
    }
}
