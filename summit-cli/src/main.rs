//! Summit: landing page, registration, and admin listing for the event.
//!
//! # Usage
//!
//! ```text
//! summit page [--minutes N]
//! summit countdown [--minutes N]
//! summit register [--name ..] [--email ..] [--message ..] [--no-input] [--minutes N] [--api-base URL]
//! summit admin login --key <key> [--json] [--api-base URL]
//! summit admin list [--json] [--api-base URL]
//! summit admin logout
//! summit ping [--json] [--api-base URL]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    admin::AdminCommand, countdown::CountdownArgs, page::PageArgs, ping::PingArgs,
    register::RegisterArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "summit",
    version,
    about = "Event landing page with a countdown-gated registration form",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the landing page once.
    Page(PageArgs),

    /// Show the registration countdown live until it closes.
    Countdown(CountdownArgs),

    /// Fill in and submit the registration form while the window is open.
    Register(RegisterArgs),

    /// Registrant listing behind the shared admin key.
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Check that the backend is up.
    Ping(PingArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Page(args) => args.run(),
        Commands::Countdown(args) => args.run(),
        Commands::Register(args) => args.run(),
        Commands::Admin { command } => commands::admin::run(command),
        Commands::Ping(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
