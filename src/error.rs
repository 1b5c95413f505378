use crate::models::Strategy;
use thiserror::Error;

// Typed failures for one (target, strategy) measurement
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("pagespeed API returned status {status} for {url}")]
    NonSuccessStatus { url: String, status: u16 },

    #[error("response for {url} was not valid JSON: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagespeed API error for {url} ({strategy}): {message}")]
    ApiRequestFailed {
        url: String,
        strategy: Strategy,
        message: String,
    },

    #[error("no lighthouse data for {url} ({strategy}), field data only")]
    NoLabData { url: String, strategy: Strategy },
}

impl ApiError {
    // Only transport failures and bad statuses are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Network { .. } | ApiError::NonSuccessStatus { .. }
        )
    }
}
