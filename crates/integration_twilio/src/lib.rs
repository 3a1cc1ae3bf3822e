//! Twilio integration
//!
//! Sends single SMS messages through the Twilio Messages API.

pub mod client;

pub use client::{MessageResource, TwilioClient, TwilioConfig, TwilioError};
