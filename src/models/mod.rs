// src/models/mod.rs

pub mod pagespeed;
pub mod report;
pub mod strategy;
pub mod target;

pub use pagespeed::{PagespeedResponse, LighthouseResult, Categories, Category, Audit, ApiErrorBody};
pub use report::{api_error_row, crux_only_row, format_number, Metric, ScoreReport, HEADERS};
pub use strategy::Strategy;
pub use target::MeasurementTarget;
