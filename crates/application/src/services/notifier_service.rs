//! Notifier service
//!
//! Submits a composed message through the SMS port and turns the outcome
//! into a [`DeliveryResult`]. Exactly one attempt is made.

use std::sync::Arc;

use domain::{ComparisonMessage, DeliveryResult, PhoneNumber};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{OutgoingSms, SmsPort};

/// Sends comparison messages via an [`SmsPort`]
#[derive(Clone)]
pub struct NotifierService {
    sms: Arc<dyn SmsPort>,
}

impl std::fmt::Debug for NotifierService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierService").finish_non_exhaustive()
    }
}

impl NotifierService {
    pub fn new(sms: Arc<dyn SmsPort>) -> Self {
        Self { sms }
    }

    /// Send `message` to `to`
    ///
    /// Provider failures are reported in the result, never raised.
    #[instrument(skip(self, message), fields(to = %to.masked(), chars = message.as_str().chars().count()))]
    pub async fn send(&self, message: &ComparisonMessage, to: &PhoneNumber) -> DeliveryResult {
        let sms = OutgoingSms::new(to.clone(), message.as_str());

        match self.sms.send_text(sms).await {
            Ok(receipt) => {
                info!(
                    message_id = %receipt.message_id,
                    status = receipt.status.as_deref().unwrap_or("unknown"),
                    segments = message.sms_segments(),
                    "SMS accepted by provider"
                );
                DeliveryResult::delivered(receipt.message_id, receipt.status)
            },
            Err(e) => {
                warn!(error = %e, "SMS delivery failed");
                let reason = match e {
                    ApplicationError::Delivery(reason) => reason,
                    other => other.to_string(),
                };
                DeliveryResult::failed(reason)
            },
        }
    }
}
