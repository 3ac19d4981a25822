//! `summit admin`: registrant listing behind the shared admin key.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use summit_client::{AdminError, AdminSession, UreqTransport};
use summit_core::Registration;

use super::ApiArgs;

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Check a key against the backend and remember it.
    Login(LoginArgs),

    /// List registrants using the remembered key.
    List(ListArgs),

    /// Forget the remembered key.
    Logout,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Shared admin key.
    #[arg(long)]
    pub key: String,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Print registrants as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Print registrants as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(command: AdminCommand) -> Result<()> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    match command {
        AdminCommand::Login(args) => {
            let rows = session(&home, &args.api)
                .login(&args.key)
                .map_err(user_facing)?;
            println!("{}", "✓ Sesión de administrador iniciada".green().bold());
            print_registrations(rows, args.json)
        }
        AdminCommand::List(args) => {
            let rows = session(&home, &args.api).refresh().map_err(user_facing)?;
            print_registrations(rows, args.json)
        }
        AdminCommand::Logout => {
            // Logout never touches the network; the default origin is fine.
            let removed = session(&home, &ApiArgs::default_origin())
                .logout()
                .map_err(user_facing)?;
            if removed {
                println!("Sesión cerrada.");
            } else {
                println!("No había una sesión activa.");
            }
            Ok(())
        }
    }
}

fn session(home: &Path, api: &ApiArgs) -> AdminSession<UreqTransport> {
    AdminSession::new(UreqTransport::new(), api.endpoints(), home)
}

/// Lead with the message an admin would see; keep the cause chain for detail.
fn user_facing(err: AdminError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct RegistrationRow {
    #[tabled(rename = "nombre")]
    name: String,
    #[tabled(rename = "email")]
    email: String,
    #[tabled(rename = "mensaje")]
    message: String,
    #[tabled(rename = "registrado")]
    created_at: String,
}

impl From<&Registration> for RegistrationRow {
    fn from(row: &Registration) -> Self {
        Self {
            name: row.name.clone(),
            email: row.email.clone(),
            message: row.message.clone().unwrap_or_default(),
            created_at: row.created_at_display(),
        }
    }
}

fn print_registrations(rows: Vec<Registration>, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("failed to serialize registrations")?
        );
        return Ok(());
    }

    let count = rows.len();
    let mut table = Table::new(rows.iter().map(RegistrationRow::from));
    table.with(Style::rounded());
    println!("{table}");
    println!("{} {}", count.to_string().bold(), "registros".dimmed());
    Ok(())
}
