use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Request body for the duration-lookup endpoint
#[derive(Debug, Serialize)]
pub struct CalculateRequest {
    #[serde(rename = "playlistUrl")]
    pub playlist_url: String,
}

/// Response body from the duration-lookup endpoint.
///
/// The service sends either `totalDurationSeconds` or `error`, never both
/// in practice. When both are present the error wins.
#[derive(Debug, Deserialize)]
pub struct CalculateResponse {
    #[serde(rename = "totalDurationSeconds")]
    pub total_duration_seconds: Option<u64>,
    pub error: Option<String>,
}

impl CalculateResponse {
    pub fn into_outcome(self) -> Result<u64, CalcError> {
        match (self.error, self.total_duration_seconds) {
            (Some(message), _) if !message.is_empty() => Err(CalcError::Service(message)),
            (_, Some(total)) => Ok(total),
            _ => Err(CalcError::Transport(anyhow::anyhow!(
                "response carried neither totalDurationSeconds nor error"
            ))),
        }
    }
}
