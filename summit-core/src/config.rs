//! Compile-time configuration for the event and its backend.

/// Display name of the event.
pub const EVENT_NAME: &str = "Digital Future Summit 2025";

/// Length of the registration window, counted from page load.
pub const REGISTRATION_DEADLINE_MINUTES: u64 = 5;

/// Default backend origin; overridable per invocation with `--api-base`.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// `POST` target for new registrations.
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// `GET` target for the admin listing (`?key=<secret>`).
pub const REGISTRATIONS_ENDPOINT: &str = "/api/registrations";

/// Backend root; answers with a small status document.
pub const HEALTH_ENDPOINT: &str = "/";

/// Database reachability check (`SELECT 1` on the backend side).
pub const DB_CHECK_ENDPOINT: &str = "/test-db";

/// Per-user state directory, relative to the home directory.
pub const STATE_DIR: &str = ".summit";
