use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::{models::trip::Purpose, state::AppState};

#[derive(Serialize)]
struct FormOptions<'a> {
    purposes: Vec<Purpose>,
    dietary: Vec<&'a str>,
    interests: &'a [String],
    food_preferences: &'a [String],
    transportation: &'a [String],
}

/*
    /api/options
*/
pub async fn get_options(state: web::Data<AppState>) -> impl Responder {
    let catalog = &state.catalog;
    HttpResponse::Ok().json(FormOptions {
        purposes: Purpose::ALL.to_vec(),
        dietary: catalog.dining_options.keys().map(String::as_str).collect(),
        interests: &catalog.interests,
        food_preferences: &catalog.food_preferences,
        transportation: &catalog.transportation,
    })
}
