//! Phone number value object with E.164 validation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated phone number in E.164 format (e.g., +16195550123)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Create a new phone number, validating E.164 format
    ///
    /// E.164 format: +[country code][subscriber number]
    /// - Starts with +
    /// - Contains only digits after +
    /// - Length: 7-15 digits (including country code)
    ///
    /// Spaces, dashes and parentheses are stripped before validation.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let value = number.into().trim().replace([' ', '-', '(', ')'], "");

        let Some(digits) = value.strip_prefix('+') else {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must start with +".to_string(),
            ));
        };

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must contain only digits after +".to_string(),
            ));
        }

        if digits.len() < 7 || digits.len() > 15 {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must have 7-15 digits".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the phone number as a string slice (E.164 format)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get digits only (without +)
    pub fn digits(&self) -> &str {
        &self.value[1..]
    }

    /// Masked form for logs, keeping only the last four digits
    pub fn masked(&self) -> String {
        let digits = self.digits();
        let visible = &digits[digits.len() - 4..];
        format!("+{}{visible}", "*".repeat(digits.len() - 4))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}
