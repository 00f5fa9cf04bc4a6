pub mod models;

use super::{ApiError, BaseApiClient};
use models::response_trips::ResponseTrips;
use models::trip::Trip;

pub struct TripsApi {
    pub client: BaseApiClient,
}

impl TripsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { client: BaseApiClient::new(base_url)? })
    }

    #[cfg(test)]
    pub fn mock(base_url: &str) -> Self {
        Self::new(base_url).unwrap()
    }

    #[cfg(test)]
    pub async fn mock_get_trips(
        server: &mut mockito::ServerGuard,
        keywords: &str,
        trips: &[Trip],
        hits: usize,
    ) -> mockito::Mock {
        let body = serde_json::json!({ "data": trips }).to_string();
        server
            .mock("GET", "/trips")
            .match_query(mockito::Matcher::UrlEncoded("keywords".into(), keywords.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Search trips, an empty `keywords` returns all of them
    pub async fn try_fetch_trips(&self, keywords: &str) -> Result<Vec<Trip>, ApiError> {
        let response = self
            .client
            .get::<ResponseTrips>("/trips", &[("keywords", keywords)])
            .await?;
        Ok(response.into_trips())
    }

    /// Search trips, any failure is logged and turns into an empty list
    pub async fn fetch_trips(&self, keywords: &str) -> Vec<Trip> {
        match self.try_fetch_trips(keywords).await {
            Ok(trips) => trips,
            Err(e) => {
                tracing::error!(keywords, error = %e, "Error fetching trips");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use rstest::rstest;

    fn sample_trips() -> Vec<Trip> {
        vec![
            Trip::new_test(1, "Koh Lipe", &["island", "sea"]),
            Trip::new_test(2, "Doi Inthanon", &["mountain"]),
        ]
    }

    #[rstest]
    #[case("")]
    #[case("sea")]
    #[case("island sea")]
    #[case("เกาะ ทะเล")]
    #[case("a&b=c")]
    #[tokio::test]
    async fn test_fetch_trips_returns_data(#[case] keywords: &str) {
        let mut server = Server::new_async().await;
        let trips = sample_trips();
        let mock = TripsApi::mock_get_trips(&mut server, keywords, &trips, 1).await;

        let trips_api = TripsApi::mock(&server.url());
        let response = trips_api.fetch_trips(keywords).await;

        assert_eq!(response, trips);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_trips_missing_data_field() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/trips")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"message": "ok"}"#)
            .create_async()
            .await;

        let trips_api = TripsApi::mock(&server.url());
        assert!(trips_api.fetch_trips("").await.is_empty());
    }

    #[rstest]
    #[case(404, r#"{"data": [{"eid": 1}]}"#)]
    #[case(500, "Internal error")]
    #[case(200, "<html>not json</html>")]
    #[case(200, r#"{"data": [{"title": "no eid"}]}"#)]
    #[tokio::test]
    async fn test_fetch_trips_failure_is_empty(#[case] status: usize, #[case] body: &str) {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/trips")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;

        let trips_api = TripsApi::mock(&server.url());
        assert!(trips_api.fetch_trips("sea").await.is_empty());
    }

    #[tokio::test]
    async fn test_try_fetch_trips_not_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/trips")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let trips_api = TripsApi::mock(&server.url());
        let response = trips_api.try_fetch_trips("sea").await;
        assert!(matches!(response.unwrap_err(), ApiError::Api(status, _) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_fetch_trips_under_configured_path() {
        let mut server = Server::new_async().await;
        let trips = sample_trips();
        let mock = server
            .mock("GET", "/api/trips")
            .match_query(Matcher::UrlEncoded("keywords".into(), "sea".into()))
            .with_status(200)
            .with_body(serde_json::json!({ "data": trips }).to_string())
            .create_async()
            .await;

        let base_url = crate::config::validate_url(&format!("{}/api/", server.url())).unwrap();
        let trips_api = TripsApi::mock(&base_url);
        assert_eq!(trips_api.fetch_trips("sea").await, trips);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_trips_network_error_is_empty() {
        // Nothing listens on the discard port
        let trips_api = TripsApi::mock("http://127.0.0.1:9");
        assert!(trips_api.fetch_trips("sea").await.is_empty());
    }
}
