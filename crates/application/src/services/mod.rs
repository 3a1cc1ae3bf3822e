//! Application services - Use case implementations

mod comparison_service;
mod message_composer;
mod notifier_service;

pub use comparison_service::{
    ComparisonService, RunFailure, RunMode, RunReport, RunStage, RunState,
};
pub use message_composer::{DeltaTier, MessageComposer};
pub use notifier_service::NotifierService;
