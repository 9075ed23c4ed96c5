//! Entity structs for all Keynote domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `keynote-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod account;
mod project;
mod qualification;
mod speaker;
mod testimonial;
mod wishlist;

pub use account::Account;
pub use project::{NewProject, Project};
pub use qualification::{NewQualificationRequest, QualificationRequest};
pub use speaker::{NewSpeaker, Speaker, SpeakerWithTestimonials};
pub use testimonial::{NewTestimonial, Testimonial};
pub use wishlist::{SpeakerSummary, WishlistEntry, WishlistEntryWithSpeaker};
