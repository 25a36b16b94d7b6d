//! Voting API Client
//!
//! Thin HTTP bindings to the external voting API, organized by domain.

mod process;
mod vote;

use serde::de::DeserializeOwned;

use crate::models::ApiEnvelope;

pub use process::*;
pub use vote::*;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by API calls
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (network, CORS, bad URL)
    Http(String),
    /// Non-2xx status
    Status(u16),
    /// Body was not the expected JSON
    Decode(String),
    /// API answered with `success: false` or without data
    Rejected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected status: {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Rejected(msg) => write!(f, "Rejected by API: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, treating `success: false` or empty data as rejection
    pub fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Rejected(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Rejected("empty response".to_string()))
    }
}

/// GET `url` and decode the JSON body, with an optional bearer token
async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> ApiResult<T> {
    let mut request = reqwest::Client::new().get(url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| ApiError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(success: bool, data: Option<u32>) -> ApiEnvelope<u32> {
        ApiEnvelope {
            success,
            message: "sin proceso activo".to_string(),
            data,
            status: 200,
        }
    }

    #[test]
    fn test_into_data() {
        assert_eq!(envelope(true, Some(5)).into_data(), Ok(5));
        assert_eq!(
            envelope(false, Some(5)).into_data(),
            Err(ApiError::Rejected("sin proceso activo".to_string()))
        );
        assert_eq!(
            envelope(true, None).into_data(),
            Err(ApiError::Rejected("empty response".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Status(401).to_string(), "Unexpected status: 401");
    }
}
