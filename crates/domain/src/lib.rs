//! Domain layer for Weather Texter
//!
//! Contains the value objects and entities that flow through a single
//! comparison run: locations, readings, messages and delivery results.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
