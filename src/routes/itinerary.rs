use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::{error::ApiError, models::trip::TripRequest, routes::SeedParams, state::AppState};

/*
    /api/itineraries/generate
*/
pub async fn generate(
    state: web::Data<AppState>,
    params: web::Query<SeedParams>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ApiError> {
    let inputs = input.into_inner().validate()?;
    log::info!(
        "Generating {}-day {} trip to {}",
        inputs.duration,
        inputs.purpose,
        inputs.destination
    );

    let mut rng = params.rng();
    let itinerary = state
        .generator
        .generate(&inputs, Local::now().date_naive(), &mut rng)?;

    Ok(HttpResponse::Ok().json(itinerary))
}
