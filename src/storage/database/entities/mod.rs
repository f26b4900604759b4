/// Conversation entity module
pub mod conversation;
/// Feedback entity module
pub mod feedback;
/// Message entity module
pub mod message;
/// Translation entity module
pub mod translation;
/// User entity module
pub mod user;

pub use conversation::Entity as Conversation;
pub use feedback::Entity as Feedback;
pub use message::Entity as Message;
pub use translation::Entity as Translation;
pub use user::Entity as User;
