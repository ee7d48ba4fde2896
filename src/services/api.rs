//! Bhandara service client
//!
//! Wraps the two REST calls of the remote bhandara service: listing events
//! near a position and creating a new event. Transport failures are mapped
//! onto `ApiError` so callers get one flat failure type.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use crate::config::ApiConfig;
use crate::models::{Bhandara, Coordinates, CreateBhandaraRequest};
use crate::utils::errors::{ApiError, ApiResult, BhandaraError, Result};
use crate::utils::logging::log_api_error;

/// The remote operations the form and feed depend on
#[async_trait]
pub trait BhandaraService: Send + Sync {
    /// List bhandaras near the given position
    async fn nearby_bhandaras(&self, coords: Coordinates) -> ApiResult<Vec<Bhandara>>;

    /// Publish a new bhandara and return the stored record
    async fn create_bhandara(&self, request: &CreateBhandaraRequest) -> ApiResult<Bhandara>;
}

/// HTTP implementation of [`BhandaraService`]
#[derive(Debug, Clone)]
pub struct BhandaraApi {
    client: Client,
    base_url: String,
}

impl BhandaraApi {
    /// Create a new BhandaraApi instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(BhandaraError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/bhandara", self.base_url)
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::Unavailable
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl BhandaraService for BhandaraApi {
    async fn nearby_bhandaras(&self, coords: Coordinates) -> ApiResult<Vec<Bhandara>> {
        let url = self.endpoint();
        debug!(latitude = coords.latitude, longitude = coords.longitude, url = %url, "Fetching nearby bhandaras");

        let response = self.client
            .get(&url)
            .query(&[("lat", coords.latitude), ("lon", coords.longitude)])
            .send()
            .await
            .map_err(|e| {
                let error = transport_error(e);
                log_api_error("nearby", &error.to_string(), None);
                error
            })?;

        let status = response.status();
        if !status.is_success() {
            let error = ApiError::FetchFailed { status: status.as_u16() };
            log_api_error("nearby", &error.to_string(), None);
            return Err(error);
        }

        let bhandaras: Vec<Bhandara> = response.json().await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        debug!(count = bhandaras.len(), "Fetched nearby bhandaras");
        Ok(bhandaras)
    }

    async fn create_bhandara(&self, request: &CreateBhandaraRequest) -> ApiResult<Bhandara> {
        let url = self.endpoint();
        debug!(title = %request.title, url = %url, "Creating bhandara");

        let response = self.client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let error = transport_error(e);
                log_api_error("create", &error.to_string(), None);
                error
            })?;

        // Read the body as text first so failures can be logged verbatim
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let error = ApiError::CreateFailed { status: status.as_u16() };
            log_api_error("create", &error.to_string(), Some(&body));
            return Err(error);
        }

        let created: Bhandara = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        info!(bhandara_id = %created.id, title = %created.title, "Bhandara created");
        Ok(created)
    }
}
