//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather adapter against a mocked Open-Meteo endpoint
//! - Twilio SMS adapter against a mocked Messages API
//! - A full comparison run wired from configuration

use std::sync::Arc;

use application::{
    ApplicationError, ComparisonService, RngSource, RunMode, RunStage, RunState, SmsPort,
    WeatherPort, ports::OutgoingSms,
};
use domain::{Location, PhoneNumber, WeatherCondition};
use infrastructure::{AppConfig, ConfigError, TwilioSmsAdapter, WeatherAdapter};
use integration_twilio::TwilioConfig;
use integration_weather::{WeatherConfig, WeatherProvider};
use secrecy::SecretString;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_SID: &str = "AC00000000000000000000000000000001";

fn open_meteo_body(temperature: f64, feels_like: f64, code: u8) -> serde_json::Value {
    serde_json::json!({
        "utc_offset_seconds": 0,
        "current": {
            "time": "2024-01-15T15:00",
            "temperature_2m": temperature,
            "apparent_temperature": feels_like,
            "weather_code": code
        },
        "daily": {
            "temperature_2m_max": [temperature + 4.0],
            "temperature_2m_min": [temperature - 6.0]
        }
    })
}

async fn mount_weather(server: &MockServer, location: &Location, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", location.latitude().to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn weather_adapter(server: &MockServer) -> WeatherAdapter {
    let config = WeatherConfig {
        base_url: Some(server.uri()),
        timeout_secs: 2,
        ..WeatherConfig::for_provider(WeatherProvider::OpenMeteo)
    };
    WeatherAdapter::new(config).unwrap()
}

fn sms_adapter(server: &MockServer) -> TwilioSmsAdapter {
    let config = TwilioConfig::new(
        ACCOUNT_SID,
        SecretString::from("test_auth_token"),
        "+16195550199",
    )
    .with_base_url(server.uri())
    .with_timeout_secs(2);
    TwilioSmsAdapter::new(config).unwrap()
}

fn messages_path() -> String {
    format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Messages.json")
}

fn recipient() -> PhoneNumber {
    PhoneNumber::new("+16175550100").unwrap()
}

// ============================================================================
// Weather Adapter Tests
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn returns_reading_for_location() {
        let server = MockServer::start().await;
        let boston = Location::boston();
        mount_weather(&server, &boston, open_meteo_body(28.2, 19.5, 73)).await;

        let reading = weather_adapter(&server)
            .current_weather(&boston)
            .await
            .unwrap();

        assert_eq!(reading.location(), &boston);
        assert_eq!(reading.rounded_temperature(), 28);
        assert_eq!(reading.rounded_feels_like(), Some(20));
        assert_eq!(reading.condition(), WeatherCondition::Snow);
        assert_eq!(reading.format_temperature(), "28°F");
    }

    #[tokio::test]
    async fn server_error_names_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = weather_adapter(&server)
            .current_weather(&Location::del_mar())
            .await
            .unwrap_err();

        match err {
            ApplicationError::WeatherFetch { location, .. } => assert_eq!(location, "Del Mar, CA"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_temperature_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "utc_offset_seconds": 0,
                "current": { "time": "2024-01-15T15:00", "temperature_2m": null, "weather_code": 0 }
            })))
            .mount(&server)
            .await;

        let result = weather_adapter(&server)
            .current_weather(&Location::boston())
            .await;
        assert!(matches!(result, Err(ApplicationError::WeatherFetch { .. })));
    }

    #[tokio::test]
    async fn absurd_temperature_is_fetch_error() {
        let server = MockServer::start().await;
        let boston = Location::boston();
        mount_weather(&server, &boston, open_meteo_body(1e300, 20.0, 0)).await;

        let err = weather_adapter(&server)
            .current_weather(&boston)
            .await
            .unwrap_err();
        match err {
            ApplicationError::WeatherFetch { location, reason } => {
                assert_eq!(location, "Boston, MA");
                assert!(reason.contains("Invalid temperature"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }
}

// ============================================================================
// Twilio SMS Adapter Tests
// ============================================================================

mod sms_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn returns_receipt_on_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(messages_path()))
            .and(body_string_contains("To=%2B16175550100"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sid": "SM123",
                "status": "queued"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = sms_adapter(&server)
            .send_text(OutgoingSms::new(recipient(), "hello"))
            .await
            .unwrap();

        assert_eq!(receipt.message_id, "SM123");
        assert_eq!(receipt.status.as_deref(), Some("queued"));
    }

    #[tokio::test]
    async fn rejection_is_delivery_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 21211,
                "message": "The 'To' number is not a valid phone number.",
                "status": 400
            })))
            .mount(&server)
            .await;

        let err = sms_adapter(&server)
            .send_text(OutgoingSms::new(recipient(), "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Delivery(_)));
        assert!(err.to_string().contains("21211"));
    }
}

// ============================================================================
// Full Run Tests
// ============================================================================

mod full_run_tests {
    use super::*;

    fn service(weather: &MockServer, sms: &MockServer) -> ComparisonService {
        ComparisonService::new(
            Arc::new(weather_adapter(weather)),
            Arc::new(sms_adapter(sms)),
            Location::del_mar(),
            Location::boston(),
        )
    }

    #[tokio::test]
    async fn send_run_reaches_done() {
        let weather = MockServer::start().await;
        let sms = MockServer::start().await;
        mount_weather(&weather, &Location::del_mar(), open_meteo_body(70.0, 70.0, 0)).await;
        mount_weather(&weather, &Location::boston(), open_meteo_body(20.0, 11.0, 71)).await;

        Mock::given(method("POST"))
            .and(path(messages_path()))
            .and(body_string_contains("70%C2%B0F"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sid": "SMdone",
                "status": "queued"
            })))
            .expect(1)
            .mount(&sms)
            .await;

        let mut rng = RngSource::seeded(7);
        let report = service(&weather, &sms)
            .run(&RunMode::Send { recipient: recipient() }, &mut rng)
            .await;

        assert_eq!(report.state(), RunState::Done);
        assert_eq!(report.exit_code(), 0);
        let message = report.message.unwrap();
        assert!(message.as_str().contains("70°F"));
        assert!(message.as_str().contains("20°F"));
        let delivery = report.delivery.unwrap();
        assert!(delivery.success);
        assert_eq!(delivery.provider_message_id.as_deref(), Some("SMdone"));
    }

    #[tokio::test]
    async fn dry_run_never_posts() {
        let weather = MockServer::start().await;
        let sms = MockServer::start().await;
        mount_weather(&weather, &Location::del_mar(), open_meteo_body(68.0, 68.0, 1)).await;
        mount_weather(&weather, &Location::boston(), open_meteo_body(28.0, 20.0, 3)).await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&sms)
            .await;

        let mut rng = RngSource::seeded(1);
        let report = service(&weather, &sms).run(&RunMode::DryRun, &mut rng).await;

        assert_eq!(report.state(), RunState::Done);
        assert!(report.transitions.contains(&RunState::DryRunPrint));
        assert!(report.delivery.is_none());
    }

    #[tokio::test]
    async fn weather_outage_fails_before_sending() {
        let weather = MockServer::start().await;
        let sms = MockServer::start().await;
        mount_weather(&weather, &Location::del_mar(), open_meteo_body(70.0, 70.0, 0)).await;
        Mock::given(method("GET"))
            .and(query_param("latitude", Location::boston().latitude().to_string()))
            .respond_with(ResponseTemplate::new(503))
            .mount(&weather)
            .await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&sms)
            .await;

        let mut rng = RngSource::seeded(3);
        let report = service(&weather, &sms)
            .run(&RunMode::Send { recipient: recipient() }, &mut rng)
            .await;

        assert_eq!(report.state(), RunState::Failed);
        assert_eq!(report.exit_code(), 1);
        let failure = report.failure.unwrap();
        assert_eq!(failure.stage, RunStage::Fetch);
        assert!(failure.error.to_string().contains("Boston, MA"));
        assert!(report.home.is_some());
    }

    #[tokio::test]
    async fn provider_rejection_fails_at_delivery() {
        let weather = MockServer::start().await;
        let sms = MockServer::start().await;
        mount_weather(&weather, &Location::del_mar(), open_meteo_body(72.0, 72.0, 0)).await;
        mount_weather(&weather, &Location::boston(), open_meteo_body(30.0, 22.0, 61)).await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "code": 20003,
                "message": "Authenticate",
                "status": 401
            })))
            .expect(1)
            .mount(&sms)
            .await;

        let mut rng = RngSource::seeded(5);
        let report = service(&weather, &sms)
            .run(&RunMode::Send { recipient: recipient() }, &mut rng)
            .await;

        assert_eq!(report.state(), RunState::Failed);
        assert_eq!(report.failure.as_ref().map(|f| f.stage), Some(RunStage::Deliver));
        assert!(report.message.is_some());

        let failure = report.failure.as_ref().unwrap();
        assert_eq!(
            format!("{}: {}", failure.stage.failure_label(), failure.error),
            "Error sending SMS: Delivery error: API error 401: Authenticate (code 20003); \
             check TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN"
        );
        assert!(!report.delivery.unwrap().success);
    }
}

// ============================================================================
// Configuration Wiring Tests
// ============================================================================

mod config_wiring_tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Vec<(String, String)> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[tokio::test]
    async fn configured_endpoints_drive_adapters() {
        let sms = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(messages_path()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sid": "SMcfg"
            })))
            .expect(1)
            .mount(&sms)
            .await;

        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("TWILIO_ACCOUNT_SID", ACCOUNT_SID),
                ("TWILIO_AUTH_TOKEN", "token"),
                ("TWILIO_PHONE_NUMBER", "+16195550199"),
                ("FRIEND_PHONE_NUMBER", "+16175550100"),
                ("WEATHER_TEXTER__TWILIO__BASE_URL", &sms.uri()),
            ]),
        )
        .unwrap();
        let settings = config.validate(true).unwrap();
        let delivery = settings.delivery.unwrap();

        let adapter = TwilioSmsAdapter::new(delivery.twilio_config()).unwrap();
        let receipt = adapter
            .send_text(OutgoingSms::new(delivery.recipient, "hi"))
            .await
            .unwrap();
        assert_eq!(receipt.message_id, "SMcfg");
        assert!(receipt.status.is_none());
    }

    #[test]
    fn sending_without_credentials_is_rejected() {
        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert!(config.validate(false).is_ok());
        assert!(matches!(
            config.validate(true),
            Err(ConfigError::MissingCredentials(_))
        ));
    }
}
