use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    catalog: CatalogStatus,
}

#[derive(Serialize)]
struct CatalogStatus {
    purposes: usize,
    dietary_keys: usize,
    transportation_modes: usize,
    destinations: usize,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = &state.catalog;
    let status = match catalog.validate() {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            log::warn!("Catalog health check failed: {}", e);
            "degraded".to_string()
        }
    };

    HttpResponse::Ok().json(HealthStatus {
        status,
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogStatus {
            purposes: catalog.activity_templates.len(),
            dietary_keys: catalog.dining_options.len(),
            transportation_modes: catalog.transportation.len(),
            destinations: catalog.destinations.len(),
        },
    })
}
