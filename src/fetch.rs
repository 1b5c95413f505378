use crate::error::ApiError;
use log::warn;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

// Fetch a URL with a bounded retry budget, returning the body text on a 200.
// Transport failures and non-200 statuses are retried after a fixed delay;
// the last error is returned once the budget is spent. Parsing the body is
// the extractor's job, not ours.
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    retries: u32,
    delay: Duration,
) -> Result<String, ApiError> {
    let mut last_error = None;

    for attempt in 1..=retries.max(1) {
        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.as_u16() == 200 {
                    return response.text().await.map_err(|source| ApiError::Network {
                        url: url.to_string(),
                        source,
                    });
                }
                warn!("Attempt {} got status {} for {}", attempt, status, url);
                last_error = Some(ApiError::NonSuccessStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            Err(source) => {
                warn!("Attempt {} failed for {}: {}", attempt, url, source);
                last_error = Some(ApiError::Network {
                    url: url.to_string(),
                    source,
                });
            }
        }

        if attempt < retries {
            tokio::time::sleep(delay).await;
        }
    }

    // retries >= 1, so the loop always ran and recorded an error
    Err(last_error.unwrap_or(ApiError::NonSuccessStatus {
        url: url.to_string(),
        status: 0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_body_on_first_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let body = fetch_with_retry(
            &client,
            &format!("{}/run", server.uri()),
            3,
            Duration::from_millis(10),
        )
        .await
        .unwrap();

        assert_eq!(body, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn retries_server_errors_then_succeeds() {
        let server = MockServer::start().await;
        // Two failures, then a good response on the third attempt
        Mock::given(method("GET"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("later"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let body = fetch_with_retry(
            &client,
            &format!("{}/run", server.uri()),
            3,
            Duration::from_millis(10),
        )
        .await
        .unwrap();

        assert_eq!(body, "later");
    }

    #[tokio::test]
    async fn gives_up_after_retry_budget() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let client = Client::new();
        let err = fetch_with_retry(
            &client,
            &format!("{}/run", server.uri()),
            3,
            Duration::from_millis(10),
        )
        .await
        .unwrap_err();

        match &err {
            ApiError::NonSuccessStatus { status, .. } => assert_eq!(*status, 500),
            other => panic!("expected NonSuccessStatus, got {other:?}"),
        }
        assert!(err.is_retryable());
    }
}
