use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use summit_client::{
    check_database, check_health, fetch_registrations, AdminError, AdminSession, Endpoints,
    HealthError, UreqTransport,
};
use summit_core::{messages, session};

fn admin(server: &MockServer, home: &TempDir) -> AdminSession<UreqTransport> {
    AdminSession::new(
        UreqTransport::new(),
        Endpoints::new(server.base_url()),
        home.path(),
    )
}

#[test]
fn rejected_key_reveals_no_rows_and_is_not_stored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/registrations")
            .query_param("key", "wrong");
        then.status(401).json_body(json!({"message": "unauthorized"}));
    });
    let home = TempDir::new().expect("home");

    let err = admin(&server, &home).login("wrong").unwrap_err();

    mock.assert_hits(1);
    assert!(matches!(err, AdminError::Unauthorized { status: 401 }));
    assert_eq!(err.user_message(), messages::ADMIN_UNAUTHORIZED);
    assert_eq!(session::load_at(home.path()).expect("load"), None);
}

#[test]
fn accepted_key_with_no_rows_is_an_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/registrations")
            .query_param("key", "s3cret");
        then.status(200).json_body(json!({"registrations": []}));
    });

    let rows = fetch_registrations(
        &UreqTransport::new(),
        &Endpoints::new(server.base_url()),
        "s3cret",
    )
    .expect("empty list is not an error");
    assert!(rows.is_empty());
}

#[test]
fn login_stores_key_and_refresh_reuses_it() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/registrations")
            .query_param("key", "s3cret");
        then.status(200).json_body(json!({
            "registrations": [
                {
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Hola",
                    "created_at": "2025-03-01T10:15:00Z"
                },
                {
                    "name": "Luis",
                    "email": "luis@example.com",
                    "message": null,
                    "created_at": "Sat, 01 Mar 2025 11:00:00 GMT"
                }
            ]
        }));
    });
    let home = TempDir::new().expect("home");
    let admin = admin(&server, &home);

    let rows = admin.login("  s3cret ").expect("login");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].message, None);
    assert_eq!(admin.restore().expect("stored"), Some("s3cret".to_string()));

    let again = admin.refresh().expect("refresh");
    assert_eq!(again, rows);
    mock.assert_hits(2);
}

#[test]
fn row_without_timestamp_does_not_hide_the_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/registrations")
            .query_param("key", "s3cret");
        then.status(200).json_body(json!({
            "registrations": [
                {"name": "Ana", "email": "ana@example.com", "message": "Hola", "created_at": null},
                {"name": "Luis", "email": "luis@example.com", "message": null,
                 "created_at": "2025-03-01T10:15:00Z"}
            ]
        }));
    });

    let rows = fetch_registrations(
        &UreqTransport::new(),
        &Endpoints::new(server.base_url()),
        "s3cret",
    )
    .expect("listing with a null timestamp still parses");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].created_at, None);
    assert_eq!(rows[0].created_at_display(), "");
    assert!(rows[1].created_at_utc().is_some());
}

#[test]
fn blank_key_is_rejected_locally() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/registrations");
        then.status(200).json_body(json!({"registrations": []}));
    });
    let home = TempDir::new().expect("home");

    let err = admin(&server, &home).login("   ").unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, AdminError::EmptyKey));
    assert_eq!(err.user_message(), messages::ADMIN_EMPTY_KEY);
}

#[test]
fn refresh_without_login_reports_not_logged_in() {
    let server = MockServer::start();
    let home = TempDir::new().expect("home");
    let err = admin(&server, &home).refresh().unwrap_err();
    assert!(matches!(err, AdminError::NotLoggedIn));
}

#[test]
fn logout_clears_stored_key() {
    let server = MockServer::start();
    let home = TempDir::new().expect("home");
    session::save_at(home.path(), "s3cret").expect("save");
    let admin = admin(&server, &home);

    assert!(admin.logout().expect("logout"));
    assert_eq!(admin.restore().expect("stored"), None);
    assert!(!admin.logout().expect("second logout is a no-op"));
}

#[test]
fn unreachable_backend_is_a_connection_error() {
    let err = fetch_registrations(
        &UreqTransport::new(),
        &Endpoints::new("http://127.0.0.1:1"),
        "s3cret",
    )
    .unwrap_err();
    assert!(matches!(err, AdminError::Connection(_)));
    assert_eq!(err.user_message(), messages::CONNECTION_FAILED);
}

#[test]
fn malformed_listing_is_distinct_from_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/registrations");
        then.status(200).body("not json");
    });

    let err = fetch_registrations(
        &UreqTransport::new(),
        &Endpoints::new(server.base_url()),
        "s3cret",
    )
    .unwrap_err();
    assert!(matches!(err, AdminError::MalformedBody(_)));
}

#[test]
fn health_reports_backend_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({
            "status": "Running",
            "service": "Flask API",
            "database_host": "db.internal"
        }));
    });

    let status = check_health(&UreqTransport::new(), &Endpoints::new(server.base_url()))
        .expect("health");
    assert_eq!(status.status, "Running");
    assert_eq!(status.database_host.as_deref(), Some("db.internal"));
}

#[test]
fn health_surfaces_non_2xx() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503);
    });

    let err = check_health(&UreqTransport::new(), &Endpoints::new(server.base_url()))
        .unwrap_err();
    assert!(matches!(err, HealthError::Status(503)));
}

#[test]
fn database_check_reads_success_and_failure_bodies() {
    let server = MockServer::start();
    let mut healthy = server.mock(|when, then| {
        when.method(GET).path("/test-db");
        then.status(200).json_body(json!({
            "status": "success",
            "message": "Conexión a la base de datos exitosa (SELECT 1 OK)."
        }));
    });
    let endpoints = Endpoints::new(server.base_url());

    let check = check_database(&UreqTransport::new(), &endpoints).expect("db check");
    assert!(check.is_ok());
    healthy.delete();

    server.mock(|when, then| {
        when.method(GET).path("/test-db");
        then.status(500).json_body(json!({
            "status": "error",
            "message": "Fallo al conectar a la base de datos."
        }));
    });

    let check = check_database(&UreqTransport::new(), &endpoints).expect("failure body");
    assert!(!check.is_ok());
    assert_eq!(check.message, "Fallo al conectar a la base de datos.");
}

#[test]
fn database_check_without_body_is_a_status_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/test-db");
        then.status(502).body("Bad Gateway");
    });

    let err = check_database(&UreqTransport::new(), &Endpoints::new(server.base_url()))
        .unwrap_err();
    assert!(matches!(err, HealthError::Status(502)));
}
