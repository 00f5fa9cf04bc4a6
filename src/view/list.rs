use super::card::{self, CardView};
use crate::constants::NO_TRIPS_FOUND;
use crate::external_api::trips_api::models::trip::Trip;

/// One card per trip in response order, or the empty-state message
pub fn render(trips: &[Trip]) -> String {
    if trips.is_empty() {
        return NO_TRIPS_FOUND.to_string();
    }
    trips
        .iter()
        .enumerate()
        .map(|(index, trip)| card::render(&CardView::from_trip(trip), index + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}
