use summit_core::{ApiStatus, DatabaseCheck};

use crate::endpoints::Endpoints;
use crate::error::HealthError;
use crate::transport::Transport;

/// `GET /` on the backend.
pub fn check_health(
    transport: &dyn Transport,
    endpoints: &Endpoints,
) -> Result<ApiStatus, HealthError> {
    let response = transport.get(&endpoints.health_url(), &[])?;
    if !response.is_success() {
        return Err(HealthError::Status(response.status));
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// `GET /test-db` on the backend.
///
/// A failing check still carries a `{status, message}` body, so any response
/// with that shape is returned as-is; inspect [`DatabaseCheck::is_ok`].
pub fn check_database(
    transport: &dyn Transport,
    endpoints: &Endpoints,
) -> Result<DatabaseCheck, HealthError> {
    let response = transport.get(&endpoints.db_check_url(), &[])?;
    match serde_json::from_str::<DatabaseCheck>(&response.body) {
        Ok(check) => {
            tracing::debug!(status = response.status, ok = check.is_ok(), "database check");
            Ok(check)
        }
        Err(_) if !response.is_success() => Err(HealthError::Status(response.status)),
        Err(err) => Err(HealthError::MalformedBody(err)),
    }
}
