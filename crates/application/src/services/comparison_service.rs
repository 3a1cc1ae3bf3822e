//! Comparison service - the daily run
//!
//! Sequences one run: fetch both readings concurrently, compose the message,
//! then either dispatch it or stop for a dry run. The [`RunReport`] records
//! every state visited so callers can render progress and pick an exit code.

use std::sync::Arc;

use domain::{ComparisonMessage, DeliveryResult, Location, PhoneNumber, WeatherReading};
use tracing::{error, info, instrument};

use super::message_composer::MessageComposer;
use super::notifier_service::NotifierService;
use crate::error::ApplicationError;
use crate::ports::{SmsPort, WeatherPort};
use crate::random::RandomSource;

/// States of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Fetching,
    Composing,
    Dispatching,
    DryRunPrint,
    Done,
    Failed,
}

impl RunState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Pipeline stage a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Fetch,
    Compose,
    Deliver,
}

impl RunStage {
    /// Diagnostic prefix for a failure in this stage
    pub const fn failure_label(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch weather data",
            Self::Compose => "Failed to compose message",
            Self::Deliver => "Error sending SMS",
        }
    }
}

/// Whether a run ends by sending or by printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Compose and stop; the SMS port is never called
    DryRun,
    /// Compose and send to `recipient`
    Send { recipient: PhoneNumber },
}

impl RunMode {
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// The stage and error that ended a failed run
#[derive(Debug)]
pub struct RunFailure {
    pub stage: RunStage,
    pub error: ApplicationError,
}

/// Everything a run produced, in order
#[derive(Debug)]
pub struct RunReport {
    /// States visited, starting with `Init`
    pub transitions: Vec<RunState>,
    pub home: Option<WeatherReading>,
    pub away: Option<WeatherReading>,
    /// Composed message; kept even when delivery fails
    pub message: Option<ComparisonMessage>,
    pub delivery: Option<DeliveryResult>,
    pub failure: Option<RunFailure>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            transitions: vec![RunState::Init],
            home: None,
            away: None,
            message: None,
            delivery: None,
            failure: None,
        }
    }

    fn enter(&mut self, state: RunState) {
        debug_assert!(
            !self.state().is_terminal(),
            "no transitions after {:?}",
            self.state()
        );
        self.transitions.push(state);
    }

    fn fail(mut self, stage: RunStage, error: ApplicationError) -> Self {
        error!(stage = ?stage, error = %error, "Run failed");
        self.failure = Some(RunFailure { stage, error });
        self.enter(RunState::Failed);
        self
    }

    /// Current (after `run`, terminal) state
    pub fn state(&self) -> RunState {
        self.transitions.last().copied().unwrap_or(RunState::Init)
    }

    pub fn is_success(&self) -> bool {
        self.state() == RunState::Done
    }

    /// Process exit code: 0 for `Done`, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

/// Runs the fetch → compose → dispatch pipeline once per call
pub struct ComparisonService {
    weather: Arc<dyn WeatherPort>,
    notifier: NotifierService,
    composer: MessageComposer,
    home: Location,
    away: Location,
}

impl std::fmt::Debug for ComparisonService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonService")
            .field("home", &self.home)
            .field("away", &self.away)
            .finish_non_exhaustive()
    }
}

impl ComparisonService {
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        sms: Arc<dyn SmsPort>,
        home: Location,
        away: Location,
    ) -> Self {
        Self {
            weather,
            notifier: NotifierService::new(sms),
            composer: MessageComposer::new(),
            home,
            away,
        }
    }

    pub const fn home(&self) -> &Location {
        &self.home
    }

    pub const fn away(&self) -> &Location {
        &self.away
    }

    /// Execute one run
    ///
    /// Never returns an error; failures end in `RunState::Failed` with the
    /// stage recorded on the report.
    #[instrument(skip(self, rng), fields(dry_run = mode.is_dry_run(), provider = self.weather.provider_name()))]
    pub async fn run(&self, mode: &RunMode, rng: &mut dyn RandomSource) -> RunReport {
        let mut report = RunReport::new();

        report.enter(RunState::Fetching);
        let (home, away) = tokio::join!(
            self.weather.current_weather(&self.home),
            self.weather.current_weather(&self.away),
        );
        let (home, away) = match (home, away) {
            (Ok(home), Ok(away)) => (home, away),
            (Err(e), other) => {
                report.away = other.ok();
                return report.fail(RunStage::Fetch, e);
            },
            (Ok(home), Err(e)) => {
                report.home = Some(home);
                return report.fail(RunStage::Fetch, e);
            },
        };
        info!(
            home = %home.format_temperature(),
            away = %away.format_temperature(),
            "Fetched both readings"
        );
        report.home = Some(home);
        report.away = Some(away);

        report.enter(RunState::Composing);
        let message = match self
            .composer
            .compose(report.home.as_ref(), report.away.as_ref(), rng)
        {
            Ok(message) => message,
            Err(e) => return report.fail(RunStage::Compose, e),
        };
        report.message = Some(message.clone());

        match mode {
            RunMode::DryRun => {
                report.enter(RunState::DryRunPrint);
                info!("Dry run, message not sent");
            },
            RunMode::Send { recipient } => {
                report.enter(RunState::Dispatching);
                let delivery = self.notifier.send(&message, recipient).await;
                let failed = (!delivery.success).then(|| {
                    delivery
                        .error
                        .clone()
                        .unwrap_or_else(|| "provider did not accept the message".to_string())
                });
                report.delivery = Some(delivery);
                if let Some(reason) = failed {
                    return report.fail(RunStage::Deliver, ApplicationError::Delivery(reason));
                }
            },
        }

        report.enter(RunState::Done);
        report
    }
}
