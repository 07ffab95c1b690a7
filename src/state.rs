use std::sync::Arc;

use crate::services::{
    catalog_service::Catalog, destination_service::DestinationSampler,
    itinerary_generation_service::ItineraryGenerator,
};

/// Shared, read-only request state.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: ItineraryGenerator,
    pub sampler: DestinationSampler,
    pub environment: String,
}

impl AppState {
    pub fn new(catalog: Catalog, environment: impl Into<String>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            generator: ItineraryGenerator::new(catalog.clone()),
            sampler: DestinationSampler::default(),
            catalog,
            environment: environment.into(),
        }
    }
}
