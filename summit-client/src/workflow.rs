//! Registration form state and its submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Loading ──2xx──────────▶ Success
//!                     │    ──non-2xx / io──▶ Error
//!                     └──blank fields─────▶ Error   (no request)
//! Success | Error ──submit──▶ Loading
//! ```
//!
//! A submit is two steps so the request can run off the caller's task:
//! [`RegistrationWorkflow::begin_submit`] moves to `Loading` and hands back the
//! request to send; [`RegistrationWorkflow::complete`] folds the outcome in.
//! While `Loading`, further submits are ignored.

use serde::Deserialize;
use serde_json::Value;

use summit_core::{
    messages, FieldError, FormField, RegistrationFormData, RegistrationView, SubmissionStatus,
};

use crate::error::{SubmitError, TransportError};
use crate::transport::{HttpResponse, Transport};

/// A validated request waiting to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub url: String,
    pub body: Value,
}

impl PendingSubmission {
    pub fn send(&self, transport: &dyn Transport) -> Result<HttpResponse, TransportError> {
        transport.post_json(&self.url, &self.body)
    }
}

/// Result of [`RegistrationWorkflow::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// A request is already in flight; nothing changed.
    Ignored,
    /// Validation failed; status is `Error`, nothing to send.
    Rejected,
    /// Status is `Loading`; send this and pass the outcome to `complete`.
    Send(PendingSubmission),
}

#[derive(Debug, Clone)]
pub struct RegistrationWorkflow {
    endpoint: String,
    form: RegistrationFormData,
    status: SubmissionStatus,
}

impl RegistrationWorkflow {
    /// A blank, idle form that submits to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            form: RegistrationFormData::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &RegistrationFormData {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    /// Allowed in any status.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// [`update_field`](Self::update_field) keyed by the field's wire name.
    pub fn update_named_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field = name.parse::<FormField>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.status.is_loading() {
            tracing::debug!("submit ignored: registration already in flight");
            return SubmitStep::Ignored;
        }

        self.status = SubmissionStatus::Loading;

        let missing = self.form.missing_required();
        if !missing.is_empty() {
            self.fail(&SubmitError::Validation(missing));
            return SubmitStep::Rejected;
        }

        match serde_json::to_value(&self.form) {
            Ok(body) => SubmitStep::Send(PendingSubmission {
                url: self.endpoint.clone(),
                body,
            }),
            Err(err) => {
                self.fail(&SubmitError::Encode(err));
                SubmitStep::Rejected
            }
        }
    }

    /// Fold the outcome of a [`PendingSubmission`] into the status.
    ///
    /// Ignored unless a submission is in flight.
    pub fn complete(
        &mut self,
        outcome: Result<HttpResponse, TransportError>,
    ) -> &SubmissionStatus {
        if !self.status.is_loading() {
            tracing::warn!(status = self.status.key(), "completion without a submission in flight");
            return &self.status;
        }

        match classify(outcome) {
            Ok(status) => {
                tracing::info!(status, "registration accepted");
                self.status = SubmissionStatus::Success(messages::REGISTRATION_SUCCESS.to_string());
            }
            Err(err) => self.fail(&err),
        }
        &self.status
    }

    /// Run a whole attempt on the calling thread.
    pub fn submit(&mut self, transport: &dyn Transport) -> &SubmissionStatus {
        if let SubmitStep::Send(pending) = self.begin_submit() {
            let outcome = pending.send(transport);
            return self.complete(outcome);
        }
        &self.status
    }

    /// What the registration section shows. Once the window has expired the
    /// form is gone, whatever the submission status.
    pub fn view(&self, is_expired: bool) -> RegistrationView {
        if is_expired {
            return RegistrationView::Closed;
        }
        RegistrationView::Open {
            form: self.form.clone(),
            status: self.status.clone(),
            submit_enabled: self.can_submit(),
        }
    }

    fn fail(&mut self, err: &SubmitError) {
        match err {
            SubmitError::Validation(_) => tracing::debug!(error = %err, "registration not sent"),
            _ => tracing::warn!(error = %err, "registration failed"),
        }
        self.status = SubmissionStatus::Error(err.user_message());
    }
}

fn classify(outcome: Result<HttpResponse, TransportError>) -> Result<u16, SubmitError> {
    let response = outcome?;
    if response.is_success() {
        return Ok(response.status);
    }
    Err(SubmitError::Server {
        status: response.status,
        message: server_message(&response.body),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// `message`, else `error`, else the fixed fallback. Blank strings count as
/// absent.
fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| {
            [body.message, body.error]
                .into_iter()
                .flatten()
                .find(|message| !message.trim().is_empty())
        })
        .unwrap_or_else(|| messages::REGISTRATION_FALLBACK_ERROR.to_string())
}
