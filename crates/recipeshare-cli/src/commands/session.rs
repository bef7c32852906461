//! Login, logout, and whoami.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::Output;
use recipeshare_core::error::AppError;
use recipeshare_core::types::{Credentials, Session};
use recipeshare_service::ClientContext;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Session display row. Never includes the token.
#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    /// User ID
    user_id: i64,
    /// Username
    username: String,
    /// Email
    email: String,
}

impl From<&Session> for SessionRow {
    fn from(s: &Session) -> Self {
        Self {
            user_id: s.user_id,
            username: s.username.clone(),
            email: s.email.clone(),
        }
    }
}

/// Execute `login`
pub async fn login(
    args: &LoginArgs,
    ctx: &ClientContext,
    out: Output,
) -> Result<(), AppError> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(super::input_error)?,
    };

    let session = ctx
        .session
        .login(&ctx.client, &Credentials::new(args.email.clone(), password))
        .await?;

    out.success(&format!("Logged in as {}", session.username));
    out.item(&SessionRow::from(&session));
    Ok(())
}

/// Execute `logout`
pub async fn logout(ctx: &ClientContext, out: Output) -> Result<(), AppError> {
    if !ctx.session.is_logged_in().await {
        out.warning("No session stored");
    }
    ctx.facade.logout().await;
    out.success("Logged out");
    Ok(())
}

/// Execute `whoami`
pub async fn whoami(ctx: &ClientContext, out: Output) -> Result<(), AppError> {
    match ctx.session.restore().await? {
        Some(session) => out.item(&SessionRow::from(&session)),
        None => out.warning("Not logged in"),
    }
    Ok(())
}
