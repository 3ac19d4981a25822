//! Key-gated registrant listing.
//!
//! The backend contract passes the shared secret as `?key=`; the key is never
//! written to logs. A key is persisted only after the backend has accepted it,
//! and stays until [`AdminSession::logout`].

use std::path::PathBuf;

use summit_core::{session, Registration, RegistrationList};

use crate::endpoints::Endpoints;
use crate::error::AdminError;
use crate::transport::Transport;

/// `GET /api/registrations?key=<key>` and decode the rows.
pub fn fetch_registrations(
    transport: &dyn Transport,
    endpoints: &Endpoints,
    key: &str,
) -> Result<Vec<Registration>, AdminError> {
    let response = transport
        .get(&endpoints.registrations_url(), &[("key", key)])
        .map_err(|err| {
            tracing::warn!(error = %err, "registrations request failed");
            AdminError::Connection(err)
        })?;

    if !response.is_success() {
        tracing::warn!(status = response.status, "admin key rejected");
        return Err(AdminError::Unauthorized {
            status: response.status,
        });
    }

    let list: RegistrationList =
        serde_json::from_str(&response.body).map_err(AdminError::MalformedBody)?;
    tracing::debug!(rows = list.registrations.len(), "registrations fetched");
    Ok(list.registrations)
}

/// Admin view state: a transport, the backend, and where the key is stored.
#[derive(Debug)]
pub struct AdminSession<T> {
    transport: T,
    endpoints: Endpoints,
    home: PathBuf,
}

impl<T: Transport> AdminSession<T> {
    /// `home` is the directory holding `.summit/admin.yaml`.
    pub fn new(transport: T, endpoints: Endpoints, home: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            endpoints,
            home: home.into(),
        }
    }

    /// Fetch with `key` and, if accepted, remember it.
    pub fn login(&self, key: &str) -> Result<Vec<Registration>, AdminError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AdminError::EmptyKey);
        }
        let rows = fetch_registrations(&self.transport, &self.endpoints, key)?;
        session::save_at(&self.home, key)?;
        tracing::info!(rows = rows.len(), "admin session stored");
        Ok(rows)
    }

    /// The key saved by an earlier `login`, if any.
    pub fn restore(&self) -> Result<Option<String>, AdminError> {
        Ok(session::load_at(&self.home)?.map(|stored| stored.key))
    }

    /// Fetch again with the stored key.
    pub fn refresh(&self) -> Result<Vec<Registration>, AdminError> {
        let key = self.restore()?.ok_or(AdminError::NotLoggedIn)?;
        fetch_registrations(&self.transport, &self.endpoints, &key)
    }

    /// Forget the stored key. Returns `true` if one was stored.
    pub fn logout(&self) -> Result<bool, AdminError> {
        let cleared = session::clear_at(&self.home)?;
        tracing::info!(cleared, "admin session cleared");
        Ok(cleared)
    }
}
