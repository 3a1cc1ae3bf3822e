//! SMS port used when delivery is not configured (dry runs)

use application::error::ApplicationError;
use application::ports::{OutgoingSms, SmsPort, SmsReceipt};
use async_trait::async_trait;
use tracing::warn;

/// Rejects every send with a configuration error
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSmsAdapter;

#[async_trait]
impl SmsPort for DisabledSmsAdapter {
    async fn send_text(&self, sms: OutgoingSms) -> Result<SmsReceipt, ApplicationError> {
        warn!(to = %sms.to.masked(), "SMS delivery requested but not configured");
        Err(ApplicationError::Configuration(
            "SMS delivery is not configured".to_string(),
        ))
    }
}
