//! `session` - manage the cached session user.

use clap::Subcommand;

use frostbox_client::error::{AppError, Result};
use frostbox_client::models::User;
use frostbox_client::state::AppState;
use frostbox_client::storage::ValidationError;
use frostbox_core::UserId;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show the cached user
    Show,
    /// Cache a user for subsequent commands
    Set {
        /// Account id at the inventory service
        #[arg(long)]
        user_id: i32,

        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,
    },
    /// Forget the cached user
    Clear,
}

pub fn run(state: &AppState, action: SessionAction) -> Result<()> {
    match action {
        SessionAction::Show => match state.session().get()? {
            Some(user) => {
                println!("{} <{}> (user id {})", user.username, user.email, user.user_id);
            }
            None => println!("No cached session."),
        },
        SessionAction::Set {
            user_id,
            username,
            email,
        } => {
            if username.trim().is_empty() {
                return Err(ValidationError::EmptyField("username").into());
            }
            if email.trim().is_empty() {
                return Err(ValidationError::EmptyField("email").into());
            }
            let user = User {
                user_id: UserId::new(user_id),
                username,
                email,
            };
            state.session().set(&user)?;
            println!("Session cached for {}.", user.username);
        }
        SessionAction::Clear => {
            state.session().clear()?;
            println!("Session cleared.");
        }
    }
    Ok(())
}

/// The cached user, or an error telling the caller how to create one.
pub fn require_user(state: &AppState) -> Result<User> {
    state
        .session()
        .current()
        .ok_or(AppError::NoSession("run `frostbox session set` first"))
}
