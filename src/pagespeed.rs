use crate::error::ApiError;
use crate::models::{Audit, Metric, PagespeedResponse, ScoreReport, Strategy};
use chrono::{DateTime, Utc};
use reqwest::Url;
use std::collections::HashMap;

pub const PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

// The four category scores we ask the API to compute, in column order
pub const CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

// Build the fully-qualified API request URL for one (target, strategy) pair.
// Pure: no I/O, total for well-formed inputs.
pub fn build_request_url(
    strategy: Strategy,
    target_url: &str,
    api_key: &str,
    categories: &[&str],
) -> String {
    build_request_url_at(PAGESPEED_ENDPOINT, strategy, target_url, api_key, categories)
}

// Same construction against an arbitrary endpoint; the tracker pins the
// real API, tests point this at a local mock server
pub(crate) fn build_request_url_at(
    endpoint: &str,
    strategy: Strategy,
    target_url: &str,
    api_key: &str,
    categories: &[&str],
) -> String {
    let mut url = Url::parse(endpoint).expect("endpoint is a valid URL");
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("url", target_url);
        query.append_pair("key", api_key);
        query.append_pair("strategy", strategy.as_str());
        for category in categories {
            query.append_pair("category", category);
        }
    }
    url.to_string()
}

// Map a raw API response body into one ScoreReport row
pub fn extract_report(
    raw_body: &str,
    strategy: Strategy,
    target_url: &str,
    timestamp: DateTime<Utc>,
) -> Result<ScoreReport, ApiError> {
    let response: PagespeedResponse =
        serde_json::from_str(raw_body).map_err(|source| ApiError::MalformedResponse {
            url: target_url.to_string(),
            source,
        })?;

    if let Some(error) = response.error {
        return Err(ApiError::ApiRequestFailed {
            url: target_url.to_string(),
            strategy,
            message: error
                .message
                .unwrap_or_else(|| "API request failed".to_string()),
        });
    }

    // Without a lighthouseResult section the API only had field (CrUX) data
    let lighthouse = response.lighthouseResult.ok_or_else(|| ApiError::NoLabData {
        url: target_url.to_string(),
        strategy,
    })?;

    let categories = &lighthouse.categories;
    let audits = &lighthouse.audits;

    Ok(ScoreReport {
        timestamp,
        performance: category_metric(categories.performance.as_ref()),
        accessibility: category_metric(categories.accessibility.as_ref()),
        best_practices: category_metric(categories.best_practices.as_ref()),
        seo: category_metric(categories.seo.as_ref()),
        fcp_ms: timing_ms(audits, "first-contentful-paint", DisplayUnit::Seconds),
        lcp_ms: timing_ms(audits, "largest-contentful-paint", DisplayUnit::Seconds),
        tbt_ms: timing_ms(audits, "total-blocking-time", DisplayUnit::Milliseconds),
        cls: audits
            .get("cumulative-layout-shift")
            .and_then(|a| a.numericValue)
            .unwrap_or(0.0),
        fetch_time: lighthouse.fetchTime.unwrap_or_else(|| "N/A".to_string()),
    })
}

fn category_metric(category: Option<&crate::models::Category>) -> Metric {
    category
        .and_then(|c| c.score)
        .map(|score| Metric::Score(score * 100.0))
        .unwrap_or(Metric::NotAvailable)
}

// Unit of an audit's human-readable displayValue, used when numericValue is missing
enum DisplayUnit {
    Seconds,
    Milliseconds,
}

fn timing_ms(audits: &HashMap<String, Audit>, key: &str, display_unit: DisplayUnit) -> f64 {
    let Some(audit) = audits.get(key) else {
        return 0.0;
    };
    if let Some(value) = audit.numericValue {
        return value;
    }
    let parsed = audit
        .displayValue
        .as_deref()
        .and_then(leading_number)
        .unwrap_or(0.0);
    match display_unit {
        DisplayUnit::Seconds => parsed * 1000.0,
        DisplayUnit::Milliseconds => parsed,
    }
}

// Parse the leading numeric portion of a display string, e.g. "1.2 s" or "1,230 ms"
fn leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    digits.parse().ok()
}
