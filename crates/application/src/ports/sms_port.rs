//! SMS port - Interface for text message providers (Twilio, etc.)

use async_trait::async_trait;
use domain::PhoneNumber;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// A text message ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingSms {
    /// Recipient phone number
    pub to: PhoneNumber,
    /// Message body
    pub body: String,
}

impl OutgoingSms {
    pub fn new(to: PhoneNumber, body: impl Into<String>) -> Self {
        Self {
            to,
            body: body.into(),
        }
    }
}

/// Provider acknowledgement for an accepted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsReceipt {
    /// Provider message identifier
    pub message_id: String,
    /// Provider status at acceptance time
    pub status: Option<String>,
}

/// Port for sending a single text message
///
/// Sender identity and credentials belong to the implementation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SmsPort: Send + Sync {
    /// Submit one message; at most once, never retried
    async fn send_text(&self, sms: OutgoingSms) -> Result<SmsReceipt, ApplicationError>;
}
