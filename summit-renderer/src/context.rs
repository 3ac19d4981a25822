//! Template context: serializable payload built from the countdown state and
//! the registration view.

use serde::Serialize;

use summit_core::{config::EVENT_NAME, messages, FormField, RegistrationView};
use summit_countdown::CountdownState;

/// Everything the page templates can reference.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub event_name: String,
    /// Remaining time as `MM:SS`.
    pub clock: String,
    pub countdown: CountdownState,
    pub deadline_minutes: u64,
    pub registration: RegistrationCtx,
}

/// The registration section.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationCtx {
    pub open: bool,
    pub fields: Vec<FieldCtx>,
    pub submit_label: String,
    pub submit_enabled: bool,
    /// `idle | loading | success | error`, or `closed`.
    pub status: String,
    pub status_line: Option<String>,
    pub closed_title: String,
    pub closed_body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldCtx {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
}

impl PageContext {
    pub fn new(countdown: &CountdownState, view: &RegistrationView) -> Self {
        Self {
            event_name: EVENT_NAME.to_string(),
            clock: countdown.clock(),
            countdown: *countdown,
            deadline_minutes: countdown.total_seconds() / 60,
            registration: RegistrationCtx::from_view(view),
        }
    }
}

impl RegistrationCtx {
    fn from_view(view: &RegistrationView) -> Self {
        let closed_title = messages::CLOSED_TITLE.to_string();
        let closed_body = messages::CLOSED_BODY.to_string();

        match view {
            RegistrationView::Closed => Self {
                open: false,
                fields: Vec::new(),
                submit_label: String::new(),
                submit_enabled: false,
                status: "closed".to_string(),
                status_line: None,
                closed_title,
                closed_body,
            },
            RegistrationView::Open {
                form,
                status,
                submit_enabled,
            } => Self {
                open: true,
                fields: FormField::all()
                    .iter()
                    .map(|field| FieldCtx {
                        name: field.to_string(),
                        label: field.label().to_string(),
                        value: form.get(*field).to_string(),
                        required: field.is_required(),
                    })
                    .collect(),
                submit_label: if status.is_loading() {
                    messages::SUBMIT_LABEL_LOADING
                } else {
                    messages::SUBMIT_LABEL
                }
                .to_string(),
                submit_enabled: *submit_enabled,
                status: status.key().to_string(),
                status_line: status.status_line(),
                closed_title,
                closed_body,
            },
        }
    }
}
