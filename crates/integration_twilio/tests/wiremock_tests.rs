//! Integration tests for the Twilio client using WireMock
//!
//! These tests mock the Messages API to verify request shape and error
//! mapping without making real API calls.

use integration_twilio::{TwilioClient, TwilioConfig, TwilioError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{basic_auth, body_string_contains, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

const ACCOUNT_SID: &str = "AC00000000000000000000000000000001";
const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC00000000000000000000000000000001/Messages.json";

fn create_client(mock_server: &MockServer) -> TwilioClient {
    let config = TwilioConfig::new(
        ACCOUNT_SID,
        SecretString::from("test_auth_token"),
        "+16195550199",
    )
    .with_base_url(mock_server.uri())
    .with_timeout_secs(2);
    #[allow(clippy::expect_used)]
    TwilioClient::new(config).expect("Failed to create client")
}

/// Sample 201 response for a created message
fn message_created_response() -> serde_json::Value {
    serde_json::json!({
        "account_sid": ACCOUNT_SID,
        "api_version": "2010-04-01",
        "body": "hello",
        "date_created": "Mon, 15 Jan 2024 15:00:00 +0000",
        "direction": "outbound-api",
        "error_code": null,
        "error_message": null,
        "from": "+16195550199",
        "num_segments": "1",
        "sid": "SM1234567890abcdef1234567890abcdef",
        "status": "queued",
        "to": "+16175550100",
        "uri": "/2010-04-01/Accounts/AC00000000000000000000000000000001/Messages/SM1234567890abcdef1234567890abcdef.json"
    })
}

/// Sample API error document
fn api_error_response(code: i64, message: &str, status: u16) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "message": message,
        "more_info": format!("https://www.twilio.com/docs/errors/{code}"),
        "status": status
    })
}

// =============================================================================
// Send Message Tests
// =============================================================================

#[tokio::test]
async fn send_message_posts_form_with_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(basic_auth(ACCOUNT_SID, "test_auth_token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("To=%2B16175550100"))
        .and(body_string_contains("From=%2B16195550199"))
        .and(body_string_contains("Body=hello+there"))
        .respond_with(ResponseTemplate::new(201).set_body_json(message_created_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client.send_message("+16175550100", "hello there").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let message = result.unwrap();
    assert_eq!(message.sid, "SM1234567890abcdef1234567890abcdef");
    assert_eq!(message.status.as_deref(), Some("queued"));
    assert_eq!(message.num_segments.as_deref(), Some("1"));
}

#[tokio::test]
async fn send_message_preserves_unicode_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        // "°F" form-encoded
        .and(body_string_contains("68%C2%B0F"))
        .respond_with(ResponseTemplate::new(201).set_body_json(message_created_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client.send_message("+16175550100", "It's 68°F ☀️").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// =============================================================================
// Error Tests
// =============================================================================

#[tokio::test]
async fn send_message_auth_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(api_error_response(20003, "Authenticate", 401)),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client.send_message("+16175550100", "hello").await;

    let err = result.unwrap_err();
    assert!(err.is_auth_error());
    assert!(
        matches!(err, TwilioError::Api { status: 401, code: Some(20003), ref message } if message == "Authenticate"),
        "Expected auth error, got: {err:?}"
    );
}

#[tokio::test]
async fn send_message_invalid_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error_response(
            21211,
            "The 'To' number +1555 is not a valid phone number.",
            400,
        )))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.send_message("+1555", "hello").await.unwrap_err();

    assert!(matches!(err, TwilioError::Api { status: 400, code: Some(21211), .. }));
    assert!(err.to_string().contains("not a valid phone number"));
}

#[tokio::test]
async fn send_message_provider_outage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.send_message("+16175550100", "hello").await.unwrap_err();

    assert!(matches!(err, TwilioError::Api { status: 503, code: None, .. }));
}

#[tokio::test]
async fn send_message_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(message_created_response())
                .set_delay(std::time::Duration::from_secs(4)),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.send_message("+16175550100", "hello").await.unwrap_err();

    assert!(matches!(err, TwilioError::Timeout(2)), "got: {err:?}");
}

#[tokio::test]
async fn send_message_unparseable_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.send_message("+16175550100", "hello").await.unwrap_err();

    assert!(matches!(err, TwilioError::Parse(_)));
}

#[tokio::test]
async fn overlong_body_is_rejected_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let body = "a".repeat(1601);
    let err = client.send_message("+16175550100", &body).await.unwrap_err();

    assert!(matches!(err, TwilioError::BodyTooLong(1601)));
}
