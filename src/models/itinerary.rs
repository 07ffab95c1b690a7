use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{activity::ActivityTemplate, trip::Purpose};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    WithinBudget,
    ExceedsBudget,
}

impl BudgetStatus {
    pub fn compare(total_cost: f64, budget: f64) -> Self {
        if total_cost <= budget {
            BudgetStatus::WithinBudget
        } else {
            BudgetStatus::ExceedsBudget
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Transportation {
    pub mode: String,
    pub estimated_cost: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Accommodation {
    #[serde(rename = "type")]
    pub kind: String,
    pub estimated_cost: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub activities: Vec<ActivityTemplate>,
    pub transportation: Transportation,
    pub dining: Meals,
    pub accommodation: Accommodation,
    pub daily_budget: f64,
    pub notes: String,
}

impl DayPlan {
    pub fn estimated_cost(&self) -> f64 {
        self.transportation.estimated_cost + self.accommodation.estimated_cost
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub id: Uuid,
    pub destination: String,
    pub purpose: Purpose,
    pub total_budget: f64,
    pub duration: u32,
    pub daily_budget: f64,
    /// Keyed 1..=duration with no gaps.
    pub days: BTreeMap<u32, DayPlan>,
    pub estimated_total: f64,
    pub budget_status: BudgetStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SampledActivity {
    pub day: u32,
    pub activity: String,
    pub cost: f64,
}

/// Output of the destination sampler: one priced activity per day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SampledPlan {
    pub destination: String,
    pub activities: Vec<SampledActivity>,
    pub total_cost: f64,
    pub budget_status: BudgetStatus,
}

/// Rounds a currency amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
