//! Comparison message entity

use serde::Serialize;

use crate::errors::DomainError;

/// Characters that fit in one UCS-2 encoded SMS
const UCS2_SINGLE_SEGMENT: usize = 70;
/// Characters per segment once a UCS-2 message is split
const UCS2_MULTI_SEGMENT: usize = 67;
const GSM_SINGLE_SEGMENT: usize = 160;
const GSM_MULTI_SEGMENT: usize = 153;

/// The composed text that is texted (or printed on a dry run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonMessage {
    text: String,
}

impl ComparisonMessage {
    /// Wrap composed text
    ///
    /// # Errors
    ///
    /// Returns a validation error if the text is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Message text cannot be empty".to_string(),
            ));
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Estimated number of SMS segments the carrier will bill
    ///
    /// Anything outside ASCII (emoji, degree signs) forces UCS-2 encoding,
    /// which is counted in UTF-16 code units.
    #[must_use]
    pub fn sms_segments(&self) -> usize {
        let (units, single, multi) = if self.text.is_ascii() {
            (self.text.len(), GSM_SINGLE_SEGMENT, GSM_MULTI_SEGMENT)
        } else {
            (
                self.text.encode_utf16().count(),
                UCS2_SINGLE_SEGMENT,
                UCS2_MULTI_SEGMENT,
            )
        };

        if units <= single {
            1
        } else {
            units.div_ceil(multi)
        }
    }
}

impl std::fmt::Display for ComparisonMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ComparisonMessage> for String {
    fn from(message: ComparisonMessage) -> Self {
        message.text
    }
}
