use crate::api::types::{NewPosition, Position};
use crate::error::{ApiError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout. A hung server surfaces as a transport error
/// instead of blocking the run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const APPLICATION_JSON: &str = "application/json";

/// Positions public API client.
pub struct PositionsClient {
    client: Client,
    base_url: String,
}

impl PositionsClient {
    /// Create a client for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/public-api/positions", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/public-api/positions/{}", self.base_url, id)
    }

    /// Fetch all positions. Expects `200` with a JSON array.
    pub async fn list(&self) -> Result<Vec<Position>> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        let body = Self::expect_status(response, StatusCode::OK).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse {
            context: "position list",
            source,
        })
    }

    /// Create a position. Expects `201` with the created resource echoed back.
    pub async fn create(&self, position: &NewPosition) -> Result<Position> {
        let url = self.collection_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .json(position)
            .send()
            .await?;

        let body = Self::expect_status(response, StatusCode::CREATED).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse {
            context: "created position",
            source,
        })
    }

    /// Update a position by id. Expects `200` with the updated resource.
    pub async fn update(&self, id: u64, position: &NewPosition) -> Result<Position> {
        let url = self.item_url(id);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .json(position)
            .send()
            .await?;

        let body = Self::expect_status(response, StatusCode::OK).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse {
            context: "updated position",
            source,
        })
    }

    /// Delete a position by id. Expects `204` with an empty body.
    pub async fn delete(&self, id: u64) -> Result<()> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Read the body and fail with `UnexpectedStatus` unless the status
    /// matches. The raw body text travels with the error for display.
    async fn expect_status(response: reqwest::Response, expected: StatusCode) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        Ok(body)
    }
}
