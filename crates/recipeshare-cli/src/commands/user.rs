//! User profile CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::Output;
use recipeshare_core::error::AppError;
use recipeshare_core::types::{User, UserUpdate};
use recipeshare_service::ClientContext;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Show a profile (defaults to the logged-in user)
    Show {
        /// User ID
        id: Option<i64>,
    },
    /// Update the logged-in user's profile
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New bio
        #[arg(long)]
        bio: Option<String>,
        /// New avatar URL
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

/// User display row
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Bio
    bio: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            bio: u.bio.clone().unwrap_or_default(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    ctx: &ClientContext,
    out: Output,
) -> Result<(), AppError> {
    match &args.command {
        UserCommand::Show { id } => {
            let user = match id {
                Some(id) => ctx.users.get_by_id(*id).await?,
                None => ctx.facade.current_user().await?,
            };
            out.item(&UserRow::from(&user));
        }
        UserCommand::Update {
            username,
            email,
            bio,
            avatar_url,
        } => {
            let update = UserUpdate {
                username: username.clone(),
                email: email.clone(),
                bio: bio.clone(),
                avatar_url: avatar_url.clone(),
            };
            let user = ctx.facade.update_current_user(&update).await?;
            out.success("Profile updated");
            out.item(&UserRow::from(&user));
        }
    }

    Ok(())
}
