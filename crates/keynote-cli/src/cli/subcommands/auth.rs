use clap::{Args, Subcommand};

/// Account and session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in.
    Signup {
        #[command(flatten)]
        credentials: CredentialArgs,
        /// Display name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in and store the session token locally.
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// End the session and forget the stored token.
    Logout,
    /// Show the signed-in account.
    Whoami,
    /// Edit your profile. An empty string clears a field.
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub email: String,
    /// At least 6 characters.
    #[arg(long)]
    pub password: String,
}
