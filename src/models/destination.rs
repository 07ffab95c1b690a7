use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Beach,
    City,
    Mountains,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DestinationType,
    pub avg_cost: f64,
    pub highlights: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EligibilityQuery {
    pub budget: f64,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlanRequest {
    pub destination: String,
    pub budget: f64,
    pub duration: i64,
}
