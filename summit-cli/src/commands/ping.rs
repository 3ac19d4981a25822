//! `summit ping`: backend health check.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use summit_client::{check_database, check_health, UreqTransport};
use summit_core::{ApiStatus, DatabaseCheck};

use super::ApiArgs;

/// Arguments for `summit ping`.
#[derive(Args, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Also ask the backend to run a query against its database.
    #[arg(long)]
    pub db: bool,

    /// Print the raw status document as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PingArgs {
    pub fn run(self) -> Result<()> {
        let endpoints = self.api.endpoints();
        let transport = UreqTransport::new();
        let status = check_health(&transport, &endpoints)
            .with_context(|| format!("backend at {} is not healthy", endpoints.base()))?;

        let database = if self.db {
            let check = check_database(&transport, &endpoints).with_context(|| {
                format!("database check at {} failed", endpoints.db_check_url())
            })?;
            Some(check)
        } else {
            None
        };

        if self.json {
            let payload = match &database {
                Some(check) => serde_json::to_string_pretty(&PingReport {
                    backend: &status,
                    database: check,
                }),
                None => serde_json::to_string_pretty(&status),
            };
            println!("{}", payload.context("failed to serialize status JSON")?);
        } else {
            println!(
                "{} {} ({})",
                "■".green().bold(),
                status.service,
                status.status
            );
            if let Some(host) = &status.database_host {
                println!("  database: {host}");
            }
            if let Some(check) = &database {
                print_database(check);
            }
        }

        match database {
            Some(check) if !check.is_ok() => bail!("database unreachable: {}", check.message),
            _ => Ok(()),
        }
    }
}

#[derive(Serialize)]
struct PingReport<'a> {
    backend: &'a ApiStatus,
    database: &'a DatabaseCheck,
}

fn print_database(check: &DatabaseCheck) {
    let marker = if check.is_ok() {
        "■".green().bold()
    } else {
        "■".red().bold()
    };
    println!("{marker} {}", check.message);
}
