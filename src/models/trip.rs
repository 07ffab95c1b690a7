use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Longest trip the planners accept, in days.
pub const MAX_DURATION_DAYS: u32 = 30;

/// Accepts 1..=[`MAX_DURATION_DAYS`] days.
pub fn validate_duration(duration: i64) -> Result<u32, ValidationError> {
    u32::try_from(duration)
        .ok()
        .filter(|d| (1..=MAX_DURATION_DAYS).contains(d))
        .ok_or(ValidationError::InvalidDuration(duration))
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    Leisure,
    Business,
    Adventure,
    Relaxation,
    Cultural,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Leisure,
        Purpose::Business,
        Purpose::Adventure,
        Purpose::Relaxation,
        Purpose::Cultural,
    ];

    /// Case-insensitive lookup of a form value such as `"Cultural"`.
    pub fn from_key(key: &str) -> Option<Purpose> {
        let key = key.trim().to_lowercase();
        Purpose::ALL.into_iter().find(|p| p.as_str() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Leisure => "leisure",
            Purpose::Business => "business",
            Purpose::Adventure => "adventure",
            Purpose::Relaxation => "relaxation",
            Purpose::Cultural => "cultural",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw trip form submission. Nothing is required at this level so that a
/// missing field can be reported by name instead of as a JSON error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TripRequest {
    pub destination: Option<String>,
    pub budget: Option<f64>,
    pub duration: Option<i64>,
    pub purpose: Option<String>,
    pub accommodation: Option<String>,
    pub dietary: Option<String>,
    pub dining: Option<String>,
    pub interests: Option<String>,
    pub mobility: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripInputs {
    pub destination: String,
    pub budget: f64,
    pub duration: u32,
    pub purpose: Purpose,
    pub accommodation: String,
    pub dietary: String,
    pub dining: String,
    pub interests: String,
    pub mobility: String,
}

impl TripRequest {
    /// Checks the required fields and normalizes the rest.
    ///
    /// An unknown purpose falls back to [`Purpose::Leisure`]; optional text
    /// fields become empty strings.
    pub fn validate(self) -> Result<TripInputs, ValidationError> {
        let destination = self
            .destination
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .ok_or(ValidationError::MissingField("destination"))?;

        let budget = self.budget.ok_or(ValidationError::MissingField("budget"))?;
        if !budget.is_finite() || budget < 0.0 {
            return Err(ValidationError::InvalidBudget(budget));
        }

        let duration = self
            .duration
            .ok_or(ValidationError::MissingField("duration"))?;
        let duration = validate_duration(duration)?;

        let purpose = match self.purpose.as_deref() {
            Some(raw) => Purpose::from_key(raw).unwrap_or_else(|| {
                log::warn!("Unknown trip purpose {:?}, using {}", raw, Purpose::default());
                Purpose::default()
            }),
            None => Purpose::default(),
        };

        Ok(TripInputs {
            destination,
            budget,
            duration,
            purpose,
            accommodation: self.accommodation.unwrap_or_default(),
            dietary: self.dietary.unwrap_or_default(),
            dining: self.dining.unwrap_or_default(),
            interests: self.interests.unwrap_or_default(),
            mobility: self.mobility.unwrap_or_default(),
        })
    }
}
