// Application state shared across all modules

use std::sync::Arc;

use crate::common::{AppConfig, Clock, FixedClock, SystemClock};
use crate::onboarding::validators::OnboardingValidator;

/// Application state containing configuration, the clock, and validators
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
    pub validator: Arc<OnboardingValidator>,
}

impl AppState {
    /// Wires the clock selected by the config into a fresh validator.
    pub fn from_config(config: AppConfig) -> Self {
        let clock: Arc<dyn Clock> = match config.fixed_today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        };
        Self::with_clock(config, clock)
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let validator = Arc::new(OnboardingValidator::new(clock.clone()));
        Self {
            config,
            clock,
            validator,
        }
    }
}
