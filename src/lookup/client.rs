use crate::error::CalcError;
use crate::lookup::models::{CalculateRequest, CalculateResponse};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/calculate";

/// Anything that can turn a playlist URL into its total duration in seconds.
pub trait DurationLookup {
    fn total_seconds(&self, playlist_url: &str) -> Result<u64, CalcError>;
}

pub struct LookupClient {
    client: Client,
    endpoint: String,
}

impl LookupClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn fetch(&self, playlist_url: &str) -> Result<CalculateResponse> {
        let request_body = CalculateRequest {
            playlist_url: playlist_url.to_string(),
        };

        debug!(endpoint = %self.endpoint, "requesting playlist duration");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .context("Failed to reach duration service")?;

        // The body decides the outcome; an error status with an `error` field
        // is still a service-reported error.
        let status = response.status();
        debug!(%status, "duration service responded");

        let body = response
            .text()
            .context("Failed to read duration service response")?;

        serde_json::from_str::<CalculateResponse>(&body)
            .with_context(|| format!("Failed to parse duration response (status {})", status))
    }
}

impl DurationLookup for LookupClient {
    fn total_seconds(&self, playlist_url: &str) -> Result<u64, CalcError> {
        let outcome = self
            .fetch(playlist_url)
            .map_err(CalcError::Transport)
            .and_then(CalculateResponse::into_outcome);

        match &outcome {
            Ok(total) => debug!(total, "playlist duration received"),
            Err(CalcError::Transport(cause)) => warn!("duration lookup failed: {:#}", cause),
            Err(err) => warn!(kind = err.kind(), "duration service reported: {}", err),
        }

        outcome
    }
}
