mod admin;
mod auth;
mod project;
mod speakers;
mod wishlist;

pub use admin::AdminCommands;
pub use auth::{AuthCommands, CredentialArgs};
pub use project::{ProjectCommands, ProjectFieldArgs};
pub use speakers::{SpeakerListArgs, SpeakersCommands};
pub use wishlist::WishlistCommands;
