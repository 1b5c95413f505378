use chrono::{DateTime, Utc};
use std::fmt;

// Column order is fixed; to_row() and the sentinel rows must match it
pub const HEADERS: [&str; 10] = [
    "Timestamp",
    "Performance",
    "Accessibility",
    "Best Practices",
    "SEO",
    "FCP (ms)",
    "LCP (ms)",
    "TBT (ms)",
    "CLS",
    "Fetch Time",
];

// A category score that may be missing from the response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Score(f64),
    NotAvailable,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Score(v) => write!(f, "{}", format_number(*v)),
            Metric::NotAvailable => write!(f, "N/A"),
        }
    }
}

// pub struct for one measurement row, one per (target, strategy) per run
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub timestamp: DateTime<Utc>,
    pub performance: Metric,
    pub accessibility: Metric,
    pub best_practices: Metric,
    pub seo: Metric,
    pub fcp_ms: f64,
    pub lcp_ms: f64,
    pub tbt_ms: f64,
    pub cls: f64,
    pub fetch_time: String,
}

impl ScoreReport {
    // Cells in header order, ready to append to a sheet
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.to_rfc3339(),
            self.performance.to_string(),
            self.accessibility.to_string(),
            self.best_practices.to_string(),
            self.seo.to_string(),
            format_number(self.fcp_ms),
            format_number(self.lcp_ms),
            format_number(self.tbt_ms),
            format_number(self.cls),
            self.fetch_time.clone(),
        ]
    }
}

// Row recording that the API request failed after all retries
pub fn api_error_row(timestamp: DateTime<Utc>) -> Vec<String> {
    sentinel_row(timestamp, "API Error")
}

// Row recording that the API returned field (CrUX) data with no lab section
pub fn crux_only_row(timestamp: DateTime<Utc>) -> Vec<String> {
    sentinel_row(timestamp, "CrUX Data Only")
}

fn sentinel_row(timestamp: DateTime<Utc>, marker: &str) -> Vec<String> {
    let mut row = vec![timestamp.to_rfc3339()];
    row.extend(std::iter::repeat(marker.to_string()).take(HEADERS.len() - 2));
    row.push("N/A".to_string());
    row
}

// Drop the trailing ".0" so whole scores render as "87", not "87.0"
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
