//! `summit page`: render the landing page once.

use anyhow::{Context, Result};
use clap::Args;

use summit_client::{Endpoints, RegistrationWorkflow};
use summit_countdown::CountdownState;
use summit_renderer::PageContext;

use super::{page_renderer, WindowArgs};

/// Arguments for `summit page`.
#[derive(Args, Debug)]
pub struct PageArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

impl PageArgs {
    pub fn run(self) -> Result<()> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let renderer = page_renderer(&home)?;

        let countdown = CountdownState::new(self.window.minutes);
        let workflow = RegistrationWorkflow::new(Endpoints::default().register_url());
        let view = workflow.view(countdown.is_expired());

        let page = renderer
            .render_page(&PageContext::new(&countdown, &view))
            .context("failed to render landing page")?;
        print!("{page}");
        Ok(())
    }
}
