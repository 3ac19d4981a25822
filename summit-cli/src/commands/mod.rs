//! Subcommands plus the argument groups and helpers they share.

pub mod admin;
pub mod countdown;
pub mod page;
pub mod ping;
pub mod register;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use summit_client::Endpoints;
use summit_core::{
    config::{DEFAULT_API_BASE, REGISTRATION_DEADLINE_MINUTES},
    session,
};
use summit_renderer::Renderer;

/// Which backend to talk to.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Backend origin, e.g. https://api.example.com
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl ApiArgs {
    /// The compiled-in backend origin.
    pub fn default_origin() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.clone())
    }
}

/// Length of the registration window.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Minutes until registration closes, counted from command start.
    #[arg(long, default_value_t = REGISTRATION_DEADLINE_MINUTES)]
    pub minutes: u64,
}

/// Single-threaded runtime; every command has one logical flow.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")
}

/// Page renderer honouring `~/.summit/templates/` overrides.
pub fn page_renderer(home: &Path) -> Result<Renderer> {
    let dir = session::templates_dir_at(home);
    Renderer::with_overrides(&dir)
        .with_context(|| format!("failed to load page templates from {}", dir.display()))
}
