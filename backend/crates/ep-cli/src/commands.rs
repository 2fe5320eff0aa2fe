use crate::register_commands::RegisterCommands;

use ep_core::Role;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check whether the backend answers its health endpoint
    Probe,

    /// Log in, optionally through a role-specific portal
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Portal to log in through (student, institution, company, admin)
        #[arg(long)]
        role: Option<Role>,
    },

    /// Create an account; a verification email is sent
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[command(subcommand)]
        role: RegisterCommands,
    },

    /// Send a password reset email
    ResetPassword {
        #[arg(long)]
        email: String,
    },

    /// List institutions available for registration
    Institutions,
}
