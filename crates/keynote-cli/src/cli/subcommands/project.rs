use clap::{Args, Subcommand};

/// Event project commands. Every project belongs to the signed-in account.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        name: String,
        #[command(flatten)]
        fields: ProjectFieldArgs,
    },
    /// List your projects, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a project and its wishlist.
    Get { id: String },
    /// Update a project. Pass an empty string to clear an optional field.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ProjectFieldArgs,
    },
    /// Delete a project and its wishlist.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct ProjectFieldArgs {
    #[arg(long)]
    pub description: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub event_date: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Whole dollars.
    #[arg(long)]
    pub budget: Option<String>,
    /// 50-100, 100-250, 250-500, 500-1000, 1000+
    #[arg(long)]
    pub audience_size: Option<String>,
    #[arg(long)]
    pub event_type: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    /// planning, active, completed, cancelled
    #[arg(long)]
    pub status: Option<String>,
}
