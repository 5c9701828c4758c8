pub use super::message::Entity as Message;
pub use super::post::Entity as Post;
pub use super::project::Entity as Project;
pub use super::room::Entity as Room;
pub use super::service::Entity as Service;
