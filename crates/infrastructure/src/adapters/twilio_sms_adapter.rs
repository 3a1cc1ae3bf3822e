//! Twilio SMS adapter - Implements SmsPort using integration_twilio

use application::error::ApplicationError;
use application::ports::{OutgoingSms, SmsPort, SmsReceipt};
use async_trait::async_trait;
use integration_twilio::{TwilioClient, TwilioConfig, TwilioError};
use tracing::{debug, instrument};

/// Adapter that sends texts through Twilio
///
/// Credentials and the sender number are bound at construction.
#[derive(Debug)]
pub struct TwilioSmsAdapter {
    client: TwilioClient,
}

impl TwilioSmsAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a credential is empty.
    pub fn new(config: TwilioConfig) -> Result<Self, ApplicationError> {
        let client = TwilioClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration Twilio error to application error
    fn map_error(err: TwilioError) -> ApplicationError {
        match err {
            TwilioError::Configuration(e) => ApplicationError::Configuration(e),
            TwilioError::Request(e) => ApplicationError::Delivery(format!("network error: {e}")),
            auth if auth.is_auth_error() => ApplicationError::Delivery(format!(
                "{auth}; check TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN"
            )),
            other => ApplicationError::Delivery(other.to_string()),
        }
    }
}

#[async_trait]
impl SmsPort for TwilioSmsAdapter {
    #[instrument(skip(self, sms), fields(to = %sms.to.masked(), from = %self.client.from_number()))]
    async fn send_text(&self, sms: OutgoingSms) -> Result<SmsReceipt, ApplicationError> {
        let message = self
            .client
            .send_message(sms.to.as_str(), &sms.body)
            .await
            .map_err(Self::map_error)?;

        debug!(sid = %message.sid, segments = ?message.num_segments, "Twilio accepted message");

        Ok(SmsReceipt {
            message_id: message.sid,
            status: message.status,
        })
    }
}
