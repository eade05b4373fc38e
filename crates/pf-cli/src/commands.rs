use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load the profile card (username, avatar, post count)
    Show,

    /// Upload a new avatar image
    Avatar {
        /// Image file to upload
        path: PathBuf,
    },

    /// Delete the account and all of its data
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Clear the local session
    Logout,

    /// Store an access token as the local session
    Login {
        #[arg(long)]
        access_token: String,
    },

    /// Activate a menu entry (e.g. my-profile, interest-settings)
    Open {
        entry: String,
    },

    /// List menu and settings entries
    Menu,
}
