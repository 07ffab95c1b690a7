use chrono::{Days, NaiveDate};
use rand::{seq::SliceRandom, Rng};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::models::{
    itinerary::{
        round_cents, Accommodation, BudgetStatus, DayPlan, Itinerary, Meals, Transportation,
    },
    trip::{TripInputs, MAX_DURATION_DAYS},
};
use crate::services::catalog_service::Catalog;

const TRANSPORT_SHARE: f64 = 0.1; // 10% of the daily budget
const ACCOMMODATION_SHARE: f64 = 0.4; // 40% of the daily budget

#[derive(Clone, Debug)]
pub struct ItineraryGenerationConfig {
    pub transport_share: f64,
    pub accommodation_share: f64,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            transport_share: TRANSPORT_SHARE,
            accommodation_share: ACCOMMODATION_SHARE,
        }
    }
}

pub struct ItineraryGenerator {
    catalog: Arc<Catalog>,
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: ItineraryGenerationConfig::default(),
        }
    }

    pub fn with_config(catalog: Arc<Catalog>, config: ItineraryGenerationConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate a day-by-day itinerary starting on `start_date`.
    ///
    /// Every day carries the purpose's full activity template. Transport mode
    /// is the only per-day random choice; costs are fixed shares of the daily
    /// budget.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        inputs: &TripInputs,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> Result<Itinerary, GenerationError> {
        if !(1..=MAX_DURATION_DAYS).contains(&inputs.duration) {
            return Err(GenerationError::InvalidInput(format!(
                "duration must be between 1 and {} days, got {}",
                MAX_DURATION_DAYS, inputs.duration
            )));
        }
        if !inputs.budget.is_finite() || inputs.budget < 0.0 {
            return Err(GenerationError::InvalidInput(format!(
                "budget must be a non-negative amount, got {}",
                inputs.budget
            )));
        }

        let activities = self
            .catalog
            .template_for(inputs.purpose)
            .ok_or(GenerationError::MissingTemplate(inputs.purpose))?;
        if self.catalog.transportation.is_empty() {
            return Err(GenerationError::NoTransportation);
        }

        let daily_budget = inputs.budget / f64::from(inputs.duration);
        let transport_cost = round_cents(daily_budget * self.config.transport_share);
        let accommodation_cost = round_cents(daily_budget * self.config.accommodation_share);

        let dining = self.catalog.dining_for(&inputs.dietary);
        let lunch = non_blank(&inputs.dining)
            .unwrap_or(self.catalog.dining_defaults.lunch.as_str())
            .to_string();
        let accommodation_kind = non_blank(&inputs.accommodation)
            .unwrap_or(self.catalog.default_accommodation.as_str())
            .to_string();

        let mut days = BTreeMap::new();
        for day in 1..=inputs.duration {
            let date = start_date
                .checked_add_days(Days::new(u64::from(day - 1)))
                .ok_or(GenerationError::DateOutOfRange(day))?;
            let mode = self
                .catalog
                .transportation
                .choose(&mut *rng)
                .ok_or(GenerationError::NoTransportation)?;

            days.insert(
                day,
                DayPlan {
                    date,
                    activities: activities.to_vec(),
                    transportation: Transportation {
                        mode: mode.clone(),
                        estimated_cost: transport_cost,
                    },
                    dining: Meals {
                        breakfast: dining.breakfast.clone(),
                        lunch: lunch.clone(),
                        dinner: dining.dinner.clone(),
                    },
                    accommodation: Accommodation {
                        kind: accommodation_kind.clone(),
                        estimated_cost: accommodation_cost,
                    },
                    daily_budget,
                    notes: inputs.mobility.clone(),
                },
            );
        }

        let estimated_total = round_cents(days.values().map(DayPlan::estimated_cost).sum());
        log::debug!(
            "Generated {}-day {} itinerary for {}",
            inputs.duration,
            inputs.purpose,
            inputs.destination
        );

        Ok(Itinerary {
            id: Uuid::new_v4(),
            destination: inputs.destination.clone(),
            purpose: inputs.purpose,
            total_budget: inputs.budget,
            duration: inputs.duration,
            daily_budget,
            days,
            estimated_total,
            budget_status: BudgetStatus::compare(estimated_total, inputs.budget),
        })
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
