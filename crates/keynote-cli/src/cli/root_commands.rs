use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, ProjectCommands, SpeakersCommands, WishlistCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse the speaker catalog.
    Speakers {
        #[command(subcommand)]
        action: SpeakersCommands,
    },
    /// Apply to join the catalog as a speaker.
    Apply(ApplicationArgs),
    /// Submit an event qualification request (four-step wizard).
    Qualify(QualifyArgs),
    /// Sign up, sign in, and inspect the current session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Your projects and wishlist counts.
    Dashboard,
    /// Event projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Per-project speaker wishlists.
    Wishlist {
        #[command(subcommand)]
        action: WishlistCommands,
    },
    /// Catalog administration (admin accounts only).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

/// Speaker profile fields, shared by `apply` and `admin speaker-create`.
///
/// Blank text fields are left to form validation so every problem is
/// reported, not just the first one clap would stop at.
#[derive(Clone, Debug, Args)]
pub struct ApplicationArgs {
    #[arg(long, default_value_t)]
    pub name: String,
    /// Professional title, e.g. "Chief Futurist".
    #[arg(long, default_value_t)]
    pub title: String,
    /// At least 100 characters.
    #[arg(long, default_value_t)]
    pub bio: String,
    /// Area of expertise (repeatable).
    #[arg(long)]
    pub expertise: Vec<String>,
    /// Comma-separated speaking topics.
    #[arg(long, default_value_t)]
    pub topics: String,
    /// Fee in whole dollars (minimum 10000).
    #[arg(long)]
    pub fee: Option<String>,
    #[arg(long, default_value_t)]
    pub location: String,
    #[arg(long)]
    pub years: Option<String>,
    /// Comma-separated languages.
    #[arg(long)]
    pub languages: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub video_url: Option<String>,
}

/// Wizard inputs. Each step is validated in order before the next is read.
#[derive(Clone, Debug, Args)]
pub struct QualifyArgs {
    // Step 1: contact
    #[arg(long, default_value_t)]
    pub organization: String,
    #[arg(long, default_value_t)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,

    // Step 2: event
    /// conference, corporate-event, summit, workshop, webinar, other
    #[arg(long)]
    pub event_type: Option<String>,
    /// technology, healthcare, finance, education, manufacturing, retail, nonprofit, other
    #[arg(long)]
    pub industry: Option<String>,
    /// 50-100, 100-250, 250-500, 500-1000, 1000+
    #[arg(long)]
    pub audience_size: Option<String>,

    // Step 3: budget and logistics
    /// Whole dollars, minimum 10000.
    #[arg(long, default_value_t)]
    pub budget: String,
    /// YYYY-MM-DD
    #[arg(long, default_value_t)]
    pub date: String,
    #[arg(long, default_value_t)]
    pub location: String,

    // Step 4: topics
    /// Topic area (repeatable).
    #[arg(long)]
    pub topic: Vec<String>,
    #[arg(long)]
    pub requirements: Option<String>,
}
