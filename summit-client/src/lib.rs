//! # summit-client
//!
//! Everything that talks to the registration backend:
//!
//! - [`workflow`]: the registration form and its submission state machine
//! - [`admin`]: key-gated registrant listing and the stored admin session
//! - [`health`]: the backend's root status document and database check
//! - [`transport`]: the [`Transport`] seam and its `ureq` implementation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use summit_client::{Endpoints, RegistrationWorkflow, UreqTransport};
//! use summit_core::FormField;
//!
//! let endpoints = Endpoints::default();
//! let transport = UreqTransport::new();
//! let mut workflow = RegistrationWorkflow::new(endpoints.register_url());
//! workflow.update_field(FormField::Name, "Ana");
//! workflow.update_field(FormField::Email, "ana@example.com");
//! let status = workflow.submit(&transport);
//! println!("{}", status.message());
//! ```

pub mod admin;
pub mod endpoints;
pub mod error;
pub mod health;
pub mod transport;
pub mod workflow;

pub use admin::{fetch_registrations, AdminSession};
pub use endpoints::Endpoints;
pub use error::{AdminError, HealthError, SubmitError, TransportError};
pub use health::{check_database, check_health};
pub use transport::{HttpResponse, Transport, UreqTransport};
pub use workflow::{PendingSubmission, RegistrationWorkflow, SubmitStep};
