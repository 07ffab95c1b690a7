use actix_web::{error::JsonPayloadError, web, HttpRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Deserialize;

use crate::error::ApiError;

pub mod destination;
pub mod health;
pub mod itinerary;
pub mod options;

/// Optional `?seed=N` for reproducible output.
#[derive(Debug, Deserialize)]
pub struct SeedParams {
    pub seed: Option<u64>,
}

impl SeedParams {
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

/// Malformed or mistyped JSON bodies answer with the same `{"error": ...}`
/// shape as validation failures.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    ApiError::InvalidBody(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/options", web::get().to(options::get_options))
                .service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(itinerary::generate)),
                )
                .service(
                    web::scope("/destinations")
                        .route("", web::get().to(destination::get_all))
                        .route("/eligible", web::post().to(destination::eligible))
                        .route("/plan", web::post().to(destination::plan)),
                ),
        );
}
