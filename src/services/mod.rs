pub mod catalog_service;
pub mod destination_service;
pub mod itinerary_generation_service;
