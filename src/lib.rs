//! Terminal search client for tourist attractions.
//!
//! A thin client over `GET /trips?keywords=...`: a debounced search
//! controller, text rendering of the results as cards and tag-click
//! refinement of the query.

pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod controller;
pub mod desktop;
pub mod errors;
pub mod external_api;
pub mod utils;
pub mod view;

pub use controller::{SearchController, SearchState};
pub use external_api::trips_api::models::trip::{Trip, TripId};
pub use external_api::trips_api::TripsApi;
