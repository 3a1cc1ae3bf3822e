//! Application layer - Use cases and orchestration
//!
//! Contains the comparison pipeline, the message composer and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod random;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use services::*;
