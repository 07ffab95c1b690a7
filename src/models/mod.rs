pub mod activity;
pub mod destination;
pub mod itinerary;
pub mod trip;
