use clap::Subcommand;

/// Speaker wishlist commands for one of your projects.
#[derive(Clone, Debug, Subcommand)]
pub enum WishlistCommands {
    /// Show a project's wishlist, highest priority first.
    List { project_id: String },
    /// Add a speaker (status interested, priority medium).
    Add {
        project_id: String,
        speaker_id: String,
    },
    /// Set an entry's status: interested, contacted, proposed, confirmed, declined.
    Status { entry_id: String, status: String },
    /// Set an entry's priority: high, medium, low.
    Priority { entry_id: String, priority: String },
    /// Replace an entry's notes, or clear them.
    Notes {
        entry_id: String,
        #[arg(required_unless_present = "clear")]
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },
    /// Remove an entry from its wishlist.
    Remove {
        entry_id: String,
        /// Confirm the removal.
        #[arg(long)]
        yes: bool,
    },
    /// Catalog speakers not yet on the wishlist.
    Available {
        project_id: String,
        /// Case-insensitive name filter.
        #[arg(long, default_value_t)]
        search: String,
    },
}
