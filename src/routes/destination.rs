use actix_web::{web, HttpResponse, Responder};

use crate::{
    error::ApiError,
    models::{
        destination::{EligibilityQuery, PlanRequest},
        trip::validate_duration,
    },
    routes::SeedParams,
    services::destination_service::filter_destinations,
    state::AppState,
};

/*
    /api/destinations
*/
pub async fn get_all(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.catalog.destinations)
}

/*
    /api/destinations/eligible
*/
pub async fn eligible(
    state: web::Data<AppState>,
    input: web::Json<EligibilityQuery>,
) -> impl Responder {
    let query = input.into_inner();
    let destinations = filter_destinations(&state.catalog.destinations, query.budget, &query.interests);
    if destinations.is_empty() {
        log::info!(
            "No destinations for budget {} with {} interests",
            query.budget,
            query.interests.len()
        );
    }
    HttpResponse::Ok().json(destinations)
}

/*
    /api/destinations/plan
*/
pub async fn plan(
    state: web::Data<AppState>,
    params: web::Query<SeedParams>,
    input: web::Json<PlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let duration = validate_duration(request.duration)?;

    let destination = state
        .catalog
        .find_destination(&request.destination)
        .ok_or_else(|| ApiError::DestinationNotFound(request.destination.clone()))?;

    let mut rng = params.rng();
    let plan = state
        .sampler
        .sample(destination, duration, request.budget, &mut rng)?;

    Ok(HttpResponse::Ok().json(plan))
}
