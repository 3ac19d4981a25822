use httpmock::prelude::*;
use serde_json::json;

use summit_client::{Endpoints, RegistrationWorkflow, UreqTransport};
use summit_core::{messages, FormField, SubmissionStatus};

fn workflow_for(server: &MockServer) -> RegistrationWorkflow {
    RegistrationWorkflow::new(Endpoints::new(server.base_url()).register_url())
}

fn fill(workflow: &mut RegistrationWorkflow, name: &str, email: &str, message: &str) {
    workflow.update_field(FormField::Name, name);
    workflow.update_field(FormField::Email, email);
    workflow.update_field(FormField::Message, message);
}

#[test]
fn accepted_registration_posts_form_once() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/register")
            .header("content-type", "application/json")
            .json_body(json!({
                "name": "Ana Torres",
                "email": "ana@example.com",
                "message": "¿Habrá grabaciones?"
            }));
        then.status(201).json_body(json!({"message": "Registro creado", "id": 7}));
    });

    let mut workflow = workflow_for(&server);
    fill(&mut workflow, "Ana Torres", "ana@example.com", "¿Habrá grabaciones?");
    let status = workflow.submit(&UreqTransport::new()).clone();

    mock.assert_hits(1);
    assert_eq!(
        status,
        SubmissionStatus::Success(messages::REGISTRATION_SUCCESS.to_string())
    );
}

#[test]
fn missing_name_sends_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/register");
        then.status(201);
    });

    let mut workflow = workflow_for(&server);
    fill(&mut workflow, "", "ana@example.com", "");
    let status = workflow.submit(&UreqTransport::new()).clone();

    mock.assert_hits(0);
    assert_eq!(
        status,
        SubmissionStatus::Error(messages::VALIDATION_REQUIRED.to_string())
    );
}

#[test]
fn server_error_message_is_shown_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/register");
        then.status(422).json_body(json!({"message": "duplicate email"}));
    });

    let mut workflow = workflow_for(&server);
    fill(&mut workflow, "Ana", "ana@example.com", "");
    let status = workflow.submit(&UreqTransport::new()).clone();

    mock.assert_hits(1);
    assert_eq!(status, SubmissionStatus::Error("duplicate email".to_string()));
}

#[test]
fn unparseable_error_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/register");
        then.status(500).body("Internal Server Error");
    });

    let mut workflow = workflow_for(&server);
    fill(&mut workflow, "Ana", "ana@example.com", "");
    let status = workflow.submit(&UreqTransport::new()).clone();

    assert_eq!(
        status,
        SubmissionStatus::Error(messages::REGISTRATION_FALLBACK_ERROR.to_string())
    );
}

#[test]
fn unreachable_backend_is_an_error_not_a_success() {
    // Port 1 (tcpmux) is not served on test hosts; the connect is refused.
    let mut workflow = RegistrationWorkflow::new(Endpoints::new("http://127.0.0.1:1").register_url());
    fill(&mut workflow, "Ana", "ana@example.com", "");
    let status = workflow.submit(&UreqTransport::new()).clone();

    assert_eq!(
        status,
        SubmissionStatus::Error(messages::CONNECTION_FAILED.to_string())
    );
}

#[test]
fn retry_after_error_sends_a_second_request() {
    let server = MockServer::start();
    let mut rejected = server.mock(|when, then| {
        when.method(POST).path("/api/register");
        then.status(409).json_body(json!({"message": "duplicate email"}));
    });

    let transport = UreqTransport::new();
    let mut workflow = workflow_for(&server);
    fill(&mut workflow, "Ana", "ana@example.com", "");
    workflow.submit(&transport);
    rejected.assert_hits(1);
    rejected.delete();

    let accepted = server.mock(|when, then| {
        when.method(POST).path("/api/register");
        then.status(200);
    });
    workflow.update_field(FormField::Email, "ana.torres@example.com");
    workflow.submit(&transport);

    accepted.assert_hits(1);
    assert!(matches!(workflow.status(), SubmissionStatus::Success(_)));
}
