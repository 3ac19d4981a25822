//! `summit register`: fill in and submit the registration form.
//!
//! The countdown runs for the whole session. The page is redrawn after every
//! change to the form or submission status, and the moment the window closes
//! the form is replaced by the closed notice, even mid-prompt or mid-request.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use summit_client::{RegistrationWorkflow, SubmitStep, UreqTransport};
use summit_core::{messages, FormField, SubmissionStatus};
use summit_countdown::CountdownHandle;
use summit_renderer::{PageContext, Renderer};

use super::{page_renderer, runtime, ApiArgs, WindowArgs};

const REGISTER_PARTIAL: &str = "_partials/register.txt.tera";

/// Arguments for `summit register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Optional question for the organisers.
    #[arg(long)]
    pub message: Option<String>,

    /// Submit once with the values given as flags, without prompting.
    #[arg(long)]
    pub no_input: bool,

    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub api: ApiArgs,
}

impl RegisterArgs {
    pub fn run(self) -> Result<()> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let renderer = page_renderer(&home)?;
        let runtime = runtime()?;
        let outcome = runtime.block_on(self.session(renderer));
        // An abandoned stdin read or request must not hold the process open.
        runtime.shutdown_background();
        outcome
    }

    async fn session(self, renderer: Renderer) -> Result<()> {
        let endpoints = self.api.endpoints();
        let transport = Arc::new(UreqTransport::new());
        let mut workflow = RegistrationWorkflow::new(endpoints.register_url());

        let prefilled = [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::Message, self.message),
        ];
        let mut ask: Vec<FormField> = Vec::new();
        for (field, value) in prefilled {
            match value {
                Some(value) => workflow.update_field(field, value),
                None => ask.push(field),
            }
        }

        let countdown = summit_countdown::start(self.window.minutes);
        let screen = Screen {
            renderer: &renderer,
            countdown: &countdown,
            scripted: self.no_input,
        };
        let mut input = (!self.no_input).then(|| BufReader::new(tokio::io::stdin()).lines());

        screen.page(&workflow)?;

        loop {
            if countdown.is_expired() {
                return screen.closed(&workflow);
            }
            if let Some(lines) = input.as_mut() {
                match prompt_fields(&screen, &mut workflow, lines, &ask).await? {
                    Prompted::Done => {}
                    Prompted::EndOfInput => input = None,
                    Prompted::Closed => return screen.closed(&workflow),
                }
            }

            match workflow.begin_submit() {
                SubmitStep::Ignored | SubmitStep::Rejected => {}
                SubmitStep::Send(pending) => {
                    screen.section(&workflow)?;
                    let transport = Arc::clone(&transport);
                    let request =
                        tokio::task::spawn_blocking(move || pending.send(transport.as_ref()));
                    tokio::select! {
                        joined = request => {
                            let outcome = joined.context("registration request task failed")?;
                            workflow.complete(outcome);
                        }
                        _ = countdown.wait_expired() => return screen.closed(&workflow),
                    }
                }
            }

            if countdown.is_expired() {
                return screen.closed(&workflow);
            }
            screen.section(&workflow)?;

            match workflow.status() {
                SubmissionStatus::Success(_) => return Ok(()),
                SubmissionStatus::Error(message) if input.is_none() => {
                    bail!("registration was not accepted: {message}")
                }
                _ => {
                    println!(
                        "{}",
                        "Corrige los datos y vuelve a intentarlo (Ctrl-D para salir).".dimmed()
                    );
                    ask = FormField::all().to_vec();
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Prompting
// ---------------------------------------------------------------------------

enum Prompted {
    Done,
    EndOfInput,
    Closed,
}

/// Ask for each of `fields` in turn. An empty answer keeps the current value.
async fn prompt_fields(
    screen: &Screen<'_>,
    workflow: &mut RegistrationWorkflow,
    lines: &mut Lines<BufReader<Stdin>>,
    fields: &[FormField],
) -> Result<Prompted> {
    for &field in fields {
        let current = workflow.form().get(field).to_string();
        print_prompt(field, &current)?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read from stdin")?,
            _ = screen.countdown.wait_expired() => {
                println!();
                return Ok(Prompted::Closed);
            }
        };
        let Some(line) = line else {
            println!();
            return Ok(Prompted::EndOfInput);
        };

        let answer = line.trim();
        if !answer.is_empty() {
            workflow.update_field(field, answer);
            screen.section(workflow)?;
        }
    }
    Ok(Prompted::Done)
}

fn print_prompt(field: FormField, current: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout().lock();
    let marker = if field.is_required() { " *" } else { "" };
    if current.is_empty() {
        write!(stdout, "{}{marker}: ", field.label().bold())
    } else {
        write!(stdout, "{}{marker} [{current}]: ", field.label().bold())
    }
    .and_then(|_| stdout.flush())
    .context("failed to write to stdout")
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

struct Screen<'a> {
    renderer: &'a Renderer,
    countdown: &'a CountdownHandle,
    /// `--no-input`: a session that ends unregistered is a failure.
    scripted: bool,
}

impl Screen<'_> {
    fn context(&self, workflow: &RegistrationWorkflow) -> PageContext {
        let state = self.countdown.snapshot();
        PageContext::new(&state, &workflow.view(state.is_expired()))
    }

    fn page(&self, workflow: &RegistrationWorkflow) -> Result<()> {
        let page = self
            .renderer
            .render_page(&self.context(workflow))
            .context("failed to render landing page")?;
        print!("{page}");
        Ok(())
    }

    /// Just the registration section; enough after a form or status change.
    fn section(&self, workflow: &RegistrationWorkflow) -> Result<()> {
        let section = self
            .renderer
            .render(REGISTER_PARTIAL, &self.context(workflow))
            .context("failed to render registration section")?;
        print!("{section}");
        Ok(())
    }

    fn closed(&self, workflow: &RegistrationWorkflow) -> Result<()> {
        tracing::info!(status = workflow.status().key(), "registration window closed during session");
        self.section(workflow)?;
        if self.scripted {
            bail!("{}", messages::CLOSED_BODY);
        }
        Ok(())
    }
}
