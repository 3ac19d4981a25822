//! Backend URLs, built from a base origin and the compiled-in paths.

use summit_core::config::{
    DB_CHECK_ENDPOINT, DEFAULT_API_BASE, HEALTH_ENDPOINT, REGISTER_ENDPOINT, REGISTRATIONS_ENDPOINT,
};

/// Base origin of the backend, e.g. `http://localhost:5000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Trailing slashes on `base` are dropped.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base, REGISTER_ENDPOINT)
    }

    pub fn registrations_url(&self) -> String {
        format!("{}{}", self.base, REGISTRATIONS_ENDPOINT)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base, HEALTH_ENDPOINT)
    }

    pub fn db_check_url(&self) -> String {
        format!("{}{}", self.base, DB_CHECK_ENDPOINT)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
