use crate::amortization::{AmortizationScheduler, DEFAULT_MAX_SCHEDULE_MONTHS};
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Label prefix for amounts; no conversion is applied
    pub currency_symbol: String,
    pub model: String,
    pub max_schedule_months: u32,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_schedule_months: DEFAULT_MAX_SCHEDULE_MONTHS,
            api_key: None,
        }
    }
}

impl PlannerConfig {
    /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL`, `PLANNER_CURRENCY` and
    /// `PLANNER_MAX_MONTHS`, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(key) = env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(symbol) = env::var("PLANNER_CURRENCY") {
            config.currency_symbol = symbol;
        }
        if let Ok(raw) = env::var("PLANNER_MAX_MONTHS") {
            config.max_schedule_months = raw.trim().parse().map_err(|_| {
                PlannerError::ConfigError(format!(
                    "PLANNER_MAX_MONTHS must be a positive integer, got '{}'",
                    raw
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_schedule_months == 0 {
            return Err(PlannerError::ConfigError(
                "max_schedule_months must be at least 1".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(PlannerError::ConfigError("model must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn scheduler(&self) -> AmortizationScheduler {
        AmortizationScheduler::new(self.max_schedule_months)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| PlannerError::ConfigError("GEMINI_API_KEY is not set".to_string()))
    }
}
