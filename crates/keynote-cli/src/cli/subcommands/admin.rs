use clap::Subcommand;

use crate::cli::root_commands::ApplicationArgs;

/// Catalog administration. Requires an account listed in `auth.admin_emails`.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Add a speaker directly to the catalog.
    SpeakerCreate(ApplicationArgs),
    /// Edit a speaker. Only the given fields change.
    SpeakerUpdate {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Replaces the whole list (repeatable).
        #[arg(long)]
        expertise: Vec<String>,
        /// Comma-separated; replaces the whole list.
        #[arg(long)]
        topics: Option<String>,
        #[arg(long)]
        fee: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Comma-separated; replaces the whole list.
        #[arg(long)]
        availability: Option<String>,
        #[arg(long)]
        years: Option<u32>,
        /// Comma-separated; replaces the whole list.
        #[arg(long)]
        languages: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        website: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        linkedin: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        twitter: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        instagram: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        video_url: Option<String>,
        /// Empty string clears.
        #[arg(long)]
        profile_image: Option<String>,
    },
    /// Delete a speaker and their testimonials and wishlist entries.
    SpeakerDelete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Attach a client testimonial to a speaker.
    TestimonialAdd {
        speaker_id: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        content: String,
        /// 1 through 5.
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        event_type: Option<String>,
    },
    /// Qualification request inbox, newest first.
    Requests {
        /// new, contacted, qualified, closed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move a qualification request to another review status.
    RequestStatus { id: String, status: String },
    /// Catalog totals and average fee.
    Stats,
}
