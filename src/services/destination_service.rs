//! Destination Service
//!
//! Budget-based destination filtering and the per-destination activity
//! sampler. The sampler assigns one activity per day, drawing from the
//! destination's pool without replacement and refilling it once exhausted,
//! and prices each activity with a uniform random draw.

use rand::{seq::SliceRandom, Rng};

use crate::error::GenerationError;
use crate::models::{
    destination::Destination,
    itinerary::{round_cents, BudgetStatus, SampledActivity, SampledPlan},
    trip::MAX_DURATION_DAYS,
};

const MIN_ACTIVITY_COST: f64 = 50.0;
const FIXED_MAX_ACTIVITY_COST: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub enum MaxActivityCost {
    /// Half of the daily budget.
    HalfDailyBudget,
    Fixed(f64),
}

#[derive(Clone, Debug)]
pub struct SamplingConfig {
    pub min_activity_cost: f64,
    pub max_activity_cost: MaxActivityCost,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_activity_cost: MIN_ACTIVITY_COST,
            max_activity_cost: MaxActivityCost::HalfDailyBudget,
        }
    }
}

impl SamplingConfig {
    pub fn fixed_range() -> Self {
        Self {
            min_activity_cost: MIN_ACTIVITY_COST,
            max_activity_cost: MaxActivityCost::Fixed(FIXED_MAX_ACTIVITY_COST),
        }
    }

    fn bounds(&self, daily_budget: f64) -> (f64, f64) {
        let max = match self.max_activity_cost {
            MaxActivityCost::HalfDailyBudget => daily_budget / 2.0,
            MaxActivityCost::Fixed(cap) => cap,
        };
        if max < self.min_activity_cost {
            (max, self.min_activity_cost)
        } else {
            (self.min_activity_cost, max)
        }
    }
}

/// Destinations whose average cost fits the budget.
///
/// NOTE: an empty interest selection yields no destinations at all, even
/// when the budget would allow some. This coupling is kept as-is; see
/// `test_no_interests_means_no_destinations`.
pub fn filter_destinations(
    destinations: &[Destination],
    budget: f64,
    interests: &[String],
) -> Vec<Destination> {
    destinations
        .iter()
        .filter(|d| d.avg_cost <= budget && !interests.is_empty())
        .cloned()
        .collect()
}

pub struct DestinationSampler {
    config: SamplingConfig,
}

impl DestinationSampler {
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn sample<R: Rng + ?Sized>(
        &self,
        destination: &Destination,
        duration: u32,
        budget: f64,
        rng: &mut R,
    ) -> Result<SampledPlan, GenerationError> {
        if !(1..=MAX_DURATION_DAYS).contains(&duration) {
            return Err(GenerationError::InvalidInput(format!(
                "duration must be between 1 and {} days, got {}",
                MAX_DURATION_DAYS, duration
            )));
        }
        if !budget.is_finite() || budget < 0.0 {
            return Err(GenerationError::InvalidInput(format!(
                "budget must be a non-negative amount, got {}",
                budget
            )));
        }
        if destination.activities.is_empty() {
            return Err(GenerationError::EmptyActivityPool(destination.name.clone()));
        }

        let daily_budget = budget / f64::from(duration);
        let (low, high) = self.config.bounds(daily_budget);

        let mut pool: Vec<&String> = Vec::new();
        let mut activities = Vec::with_capacity(duration as usize);
        for day in 1..=duration {
            if pool.is_empty() {
                pool = destination.activities.iter().collect();
                pool.shuffle(&mut *rng);
            }
            let activity = match pool.pop() {
                Some(activity) => activity.clone(),
                None => return Err(GenerationError::EmptyActivityPool(destination.name.clone())),
            };
            let cost = if high > low {
                rng.gen_range(low..=high)
            } else {
                low
            };
            activities.push(SampledActivity {
                day,
                activity,
                cost: round_cents(cost),
            });
        }

        let total_cost = round_cents(activities.iter().map(|a| a.cost).sum());
        log::debug!(
            "Sampled {} activities for {} (total {:.2})",
            activities.len(),
            destination.name,
            total_cost
        );

        Ok(SampledPlan {
            destination: destination.name.clone(),
            activities,
            total_cost,
            budget_status: BudgetStatus::compare(total_cost, budget),
        })
    }
}

impl Default for DestinationSampler {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}
