//! `summit countdown`: live clock until registration closes.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use summit_core::messages;
use summit_countdown::CountdownState;

use super::{runtime, WindowArgs};

/// Arguments for `summit countdown`.
#[derive(Args, Debug)]
pub struct CountdownArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

impl CountdownArgs {
    pub fn run(self) -> Result<()> {
        runtime()?.block_on(watch_clock(self.window.minutes))
    }
}

async fn watch_clock(minutes: u64) -> Result<()> {
    let handle = summit_countdown::start(minutes);
    let mut rx = handle.subscribe();
    print_clock(&handle.snapshot())?;

    loop {
        if handle.is_expired() {
            break;
        }
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *rx.borrow_and_update();
                print_clock(&state)?;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for ctrl-c")?;
                let state = handle.stop().await;
                println!();
                tracing::debug!(seconds_left = state.seconds_left(), "countdown interrupted");
                return Ok(());
            }
        }
    }

    println!();
    println!("{}", messages::CLOSED_TITLE.red().bold());
    println!("{}", messages::CLOSED_BODY);
    Ok(())
}

fn print_clock(state: &CountdownState) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r  El Registro cierra en: {}", state.clock().bold())
        .and_then(|_| stdout.flush())
        .context("failed to write to stdout")
}
