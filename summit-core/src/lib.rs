//! Summit core library: domain types, compile-time configuration, the admin
//! session store, and errors.
//!
//! Public API surface:
//! - [`types`]: form data, submission status, admin rows
//! - [`config`]: event constants and endpoint paths
//! - [`messages`]: user-facing (localized) status strings
//! - [`session`]: load / save / clear of the stored admin key
//! - [`error`]: [`SessionError`], [`FieldError`]

pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod types;

pub use error::{FieldError, SessionError};
pub use types::{
    AdminSessionFile, ApiStatus, DatabaseCheck, FormField, Registration, RegistrationFormData,
    RegistrationList, RegistrationView, SubmissionStatus,
};
