pub mod trips_api;

use reqwest::{header::{HeaderMap, HeaderValue, ACCEPT}, Client, StatusCode, Url};
use thiserror::Error;

const APPLICATION_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Api error {0}: {1}")]
    Api(StatusCode, String),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Parse(String),
}

/// Basic api client
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {

    /// `endpoint` is resolved under the base path, never against the host root
    fn build_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    async fn handle_response<T: serde::de::DeserializeOwned> (
        &self,
        response: reqwest::Response
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api(status, body));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::Serde(e))
        }
    }

    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::get_default_headers())
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        let mut parse_base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if !parse_base_url.path().ends_with('/') {
            let path = format!("{}/", parse_base_url.path());
            parse_base_url.set_path(&path);
        }

        Ok(
            Self {
                client,
                base_url: parse_base_url,
        })
    }

    /// GET `endpoint` with the given query pairs, values are url-encoded
    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint)?;
        tracing::debug!(%url, ?query, "GET");
        let response = self.client.get(url).query(query).send().await?;
        self.handle_response(response).await
    }
}
