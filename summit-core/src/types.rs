//! Domain types for the registration form and the admin listing.
//!
//! Wire-facing structs serialize with serde using the field names the backend
//! expects (`name`, `email`, `message`, `created_at`, `registrations`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::messages;

// ---------------------------------------------------------------------------
// Registration form
// ---------------------------------------------------------------------------

/// Names of the editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// All fields in form order.
    pub fn all() -> &'static [FormField] {
        &[FormField::Name, FormField::Email, FormField::Message]
    }

    /// Fields that must be non-blank before a submit goes out.
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email)
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nombre Completo",
            FormField::Email => "Correo Electrónico",
            FormField::Message => "Pregunta o Mensaje (Opcional)",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Email => write!(f, "email"),
            FormField::Message => write!(f, "message"),
        }
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(FieldError(other.to_string())),
        }
    }
}

/// Registrant input, sent verbatim as the `POST /api/register` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationFormData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl RegistrationFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Required fields that are empty or whitespace-only, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::all()
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }
}

/// Lifecycle of one registration attempt.
///
/// The message travels inside the variants that have one, so `Idle` and
/// `Loading` can never carry text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    /// The human-readable message; empty for `Idle` and `Loading`.
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Loading => "",
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => message,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    /// Stable lowercase key, used by templates and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Loading => "loading",
            SubmissionStatus::Success(_) => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }

    /// Status line as shown under the form; `None` while idle.
    pub fn status_line(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Loading => Some(format!("… {}", messages::SENDING)),
            SubmissionStatus::Success(message) => Some(format!("✓ {message}")),
            SubmissionStatus::Error(message) => Some(format!("⚠ {message}")),
        }
    }
}

/// What the registration section shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationView {
    /// The window is still open: form, current status, submit control state.
    Open {
        form: RegistrationFormData,
        status: SubmissionStatus,
        submit_enabled: bool,
    },
    /// The window has expired; only the closed notice is shown.
    Closed,
}

impl RegistrationView {
    pub fn is_open(&self) -> bool {
        matches!(self, RegistrationView::Open { .. })
    }
}

// ---------------------------------------------------------------------------
// Admin listing
// ---------------------------------------------------------------------------

/// One registrant row as returned by `GET /api/registrations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Raw timestamp as sent by the backend; rows written without one come
    /// back as `null`.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Registration {
    /// Parse `created_at` as RFC 3339, RFC 2822, or a naive UTC datetime.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// `created_at` in the viewer's local time zone, the raw string when it
    /// cannot be parsed, or empty when absent.
    pub fn created_at_display(&self) -> String {
        match self.created_at_utc() {
            Some(ts) => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => self.created_at.clone().unwrap_or_default(),
        }
    }
}

/// Body of a successful `GET /api/registrations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationList {
    pub registrations: Vec<Registration>,
}

/// Body of `GET /` on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_host: Option<String>,
}

/// Body of `GET /test-db`. The backend answers 500 with the same shape when
/// the database is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCheck {
    /// `success` or `error`.
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl DatabaseCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "success"
    }
}

/// Persisted admin session, stored at `~/.summit/admin.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSessionFile {
    pub key: String,
    pub saved_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
