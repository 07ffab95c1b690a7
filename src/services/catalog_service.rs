//! Catalog Service
//!
//! Holds the fixed lookup tables the planners draw from: activity templates
//! per trip purpose, dining suggestions per dietary key, transportation modes
//! and the destination list. A catalog is built once at startup, either from
//! the built-in tables or from a JSON file, and shared read-only afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{
    activity::ActivityTemplate,
    destination::{Destination, DestinationType},
    trip::Purpose,
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DiningPair {
    pub breakfast: String,
    pub dinner: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DiningDefaults {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub activity_templates: BTreeMap<Purpose, Vec<ActivityTemplate>>,
    /// Keys are lowercase dietary preferences, e.g. `"vegan"`.
    pub dining_options: BTreeMap<String, DiningPair>,
    pub dining_defaults: DiningDefaults,
    pub default_accommodation: String,
    pub transportation: Vec<String>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub food_preferences: Vec<String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let mut activity_templates = BTreeMap::new();
        activity_templates.insert(
            Purpose::Leisure,
            vec![
                ActivityTemplate::new("City Walking Tour", "09:00 - 12:00", "sightseeing"),
                ActivityTemplate::new("Local Market Visit", "13:00 - 15:00", "shopping"),
                ActivityTemplate::new("Sunset Viewpoint", "18:00 - 19:30", "sightseeing"),
            ],
        );
        activity_templates.insert(
            Purpose::Business,
            vec![
                ActivityTemplate::new("Client Meetings", "09:00 - 12:00", "work"),
                ActivityTemplate::new("Networking Lunch", "12:30 - 14:00", "networking"),
                ActivityTemplate::new("Conference Sessions", "14:30 - 17:30", "work"),
            ],
        );
        activity_templates.insert(
            Purpose::Adventure,
            vec![
                ActivityTemplate::new("Guided Hike", "07:00 - 11:00", "outdoor"),
                ActivityTemplate::new("Kayaking", "13:00 - 16:00", "water sports"),
                ActivityTemplate::new("Night Adventure Tour", "19:00 - 21:00", "outdoor"),
            ],
        );
        activity_templates.insert(
            Purpose::Relaxation,
            vec![
                ActivityTemplate::new("Spa Treatment", "10:00 - 12:00", "wellness"),
                ActivityTemplate::new("Beach or Pool Time", "13:00 - 16:00", "leisure"),
                ActivityTemplate::new("Yoga Session", "17:00 - 18:00", "wellness"),
            ],
        );
        activity_templates.insert(
            Purpose::Cultural,
            vec![
                ActivityTemplate::new("Museum Visit", "09:00 - 12:00", "culture"),
                ActivityTemplate::new("Historical Site Tour", "13:00 - 16:00", "history"),
                ActivityTemplate::new("Traditional Performance", "19:00 - 21:00", "arts"),
            ],
        );

        let dining_options = [
            ("vegetarian", "Green Garden Cafe", "Veggie Delight"),
            ("vegan", "Vegan Bistro", "Organic Eatery"),
            ("gluten-free", "Gluten-Free Bakery", "Celiac-Safe Kitchen"),
            ("halal", "Halal Breakfast House", "Halal Grill"),
        ]
        .into_iter()
        .map(|(key, breakfast, dinner)| {
            (
                key.to_string(),
                DiningPair {
                    breakfast: breakfast.to_string(),
                    dinner: dinner.to_string(),
                },
            )
        })
        .collect();

        Self {
            activity_templates,
            dining_options,
            dining_defaults: DiningDefaults {
                breakfast: "Local Cafe".to_string(),
                lunch: "Local Restaurant".to_string(),
                dinner: "Popular Local Restaurant".to_string(),
            },
            default_accommodation: "Hotel".to_string(),
            transportation: to_strings(&["Public Transit", "Taxi", "Rental Car", "Walking"]),
            destinations: builtin_destinations(),
            interests: to_strings(&["Adventure", "Relaxation", "Culture", "History", "Cuisine"]),
            food_preferences: to_strings(&["Vegetarian", "Vegan", "Gluten-Free", "No Restrictions"]),
        }
    }

    /// Reads a JSON catalog from disk and checks it is usable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(raw)?;
        catalog.dining_options = catalog
            .dining_options
            .into_iter()
            .map(|(key, pair)| (normalize_key(&key), pair))
            .collect();
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let missing: Vec<&str> = Purpose::ALL
            .iter()
            .filter(|p| {
                self.activity_templates
                    .get(p)
                    .map_or(true, |template| template.is_empty())
            })
            .map(|p| p.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::Incomplete(format!(
                "no activity template for: {}",
                missing.join(", ")
            )));
        }

        if self.transportation.is_empty() {
            return Err(CatalogError::Incomplete(
                "transportation list is empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn template_for(&self, purpose: Purpose) -> Option<&[ActivityTemplate]> {
        self.activity_templates.get(&purpose).map(Vec::as_slice)
    }

    /// Breakfast and dinner for a dietary preference, or the generic
    /// defaults when the key is blank or unknown.
    pub fn dining_for(&self, dietary: &str) -> DiningPair {
        match self.dining_options.get(&normalize_key(dietary)) {
            Some(pair) => pair.clone(),
            None => DiningPair {
                breakfast: self.dining_defaults.breakfast.clone(),
                dinner: self.dining_defaults.dinner.clone(),
            },
        }
    }

    pub fn find_destination(&self, name: &str) -> Option<&Destination> {
        let wanted = normalize_key(name);
        self.destinations
            .iter()
            .find(|d| normalize_key(&d.name) == wanted)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn builtin_destinations() -> Vec<Destination> {
    vec![
        Destination {
            name: "Bali, Indonesia".to_string(),
            kind: DestinationType::Beach,
            avg_cost: 1200.0,
            highlights: to_strings(&["Beaches", "Temples", "Surfing"]),
            activities: to_strings(&["Beach Yoga", "Temple Tour", "Snorkeling"]),
        },
        Destination {
            name: "Tokyo, Japan".to_string(),
            kind: DestinationType::City,
            avg_cost: 2000.0,
            highlights: to_strings(&["Technology", "Culture", "Food"]),
            activities: to_strings(&["City Tour", "Sushi Experience", "Tech Museum"]),
        },
        Destination {
            name: "Swiss Alps".to_string(),
            kind: DestinationType::Mountains,
            avg_cost: 2500.0,
            highlights: to_strings(&["Hiking", "Scenery", "Alpine Villages"]),
            activities: to_strings(&["Mountain Hiking", "Scenic Train Ride", "Village Tour"]),
        },
    ]
}
