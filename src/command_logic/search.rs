use crate::external_api::trips_api::TripsApi;
use crate::view;

/// One-shot search, the words are joined with single spaces
pub async fn search_trips(keywords: &[String], trips_api: &TripsApi) -> String {
    let query = keywords.join(" ");
    let trips = trips_api.fetch_trips(&query).await;
    view::list::render(&trips)
}
