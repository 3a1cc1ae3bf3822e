//! Delivery result entity

use serde::Serialize;

/// Outcome of a single SMS submission
///
/// At-most-once: a failed result is reported, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    /// Whether the provider accepted the message
    pub success: bool,
    /// Provider identifier for the accepted message (e.g. a Twilio SID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_message_id: Option<String>,
    /// Provider status at submission time (e.g. "queued")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryResult {
    /// The provider accepted the message
    pub fn delivered(provider_message_id: impl Into<String>, status: Option<String>) -> Self {
        Self {
            success: true,
            provider_message_id: Some(provider_message_id.into()),
            status,
            error: None,
        }
    }

    /// The provider rejected the message or could not be reached
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            provider_message_id: None,
            status: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivered_carries_id_and_status() {
        let result = DeliveryResult::delivered("SM123", Some("queued".to_string()));
        assert!(result.success);
        assert_eq!(result.provider_message_id.as_deref(), Some("SM123"));
        assert_eq!(result.status.as_deref(), Some("queued"));
        assert!(result.error.is_none());
    }

    #[test]
    fn failed_carries_error_only() {
        let result = DeliveryResult::failed("Authenticate");
        assert!(!result.success);
        assert!(result.provider_message_id.is_none());
        assert_eq!(result.error.as_deref(), Some("Authenticate"));
    }

    #[test]
    fn serialization_skips_empty_fields() {
        let json = serde_json::to_string(&DeliveryResult::failed("nope")).unwrap();
        assert!(!json.contains("provider_message_id"));
        assert!(json.contains("\"success\":false"));
    }
}
