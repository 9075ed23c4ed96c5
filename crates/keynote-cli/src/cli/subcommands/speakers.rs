use clap::{Args, Subcommand};

/// Public catalog commands. No sign-in needed.
#[derive(Clone, Debug, Subcommand)]
pub enum SpeakersCommands {
    /// List speakers matching the filters, by name.
    List(SpeakerListArgs),
    /// Show one speaker with testimonials.
    Get { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct SpeakerListArgs {
    /// Case-insensitive text matched against name, title, and bio.
    #[arg(long)]
    pub search: Option<String>,
    /// Topic; matches speakers whose expertise lists it ("all" for any).
    #[arg(long)]
    pub topic: Option<String>,
    /// Budget bucket: 10k-15k, 15k-25k, 25k+ (anything else means all).
    #[arg(long)]
    pub budget: Option<String>,
    /// Substring of the speaker's location.
    #[arg(long)]
    pub location: Option<String>,
    /// Area of expertise (repeatable; any match counts).
    #[arg(long)]
    pub expertise: Vec<String>,
    /// Speaking topic (repeatable; any match counts).
    #[arg(long)]
    pub speaking_topic: Vec<String>,
    #[arg(long)]
    pub min_fee: Option<i64>,
    #[arg(long)]
    pub max_fee: Option<i64>,
    #[arg(long)]
    pub limit: Option<u32>,
}
