use crate::config::Config;
use crate::error::ApiError;
use crate::fetch::fetch_with_retry;
use crate::models::{api_error_row, crux_only_row, MeasurementTarget, Strategy};
use crate::pagespeed::{self, extract_report, CATEGORIES, PAGESPEED_ENDPOINT};
use crate::sheet::{sheet_name, Workbook};
use anyhow::Result;
use chrono::Utc;
use log::{error, info, warn};
use reqwest::Client;
use std::time::Duration;

// Run one full measurement pass: every target under every strategy,
// strictly sequential, one appended row per pair no matter what
pub async fn run_tracker(config: &Config, client: &Client, workbook: &Workbook) -> Result<()> {
    run_against(PAGESPEED_ENDPOINT, config, client, workbook).await
}

pub(crate) async fn run_against(
    endpoint: &str,
    config: &Config,
    client: &Client,
    workbook: &Workbook,
) -> Result<()> {
    let mut first = true;
    for target in &config.targets {
        for strategy in Strategy::ALL {
            // Pause between pairs, respecting the upstream request rate
            if !first && config.pair_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(config.pair_delay_ms)).await;
            }
            first = false;

            measure_pair(endpoint, config, client, workbook, target, strategy).await?;
        }
    }
    Ok(())
}

async fn measure_pair(
    endpoint: &str,
    config: &Config,
    client: &Client,
    workbook: &Workbook,
    target: &MeasurementTarget,
    strategy: Strategy,
) -> Result<()> {
    let timestamp = Utc::now();
    let sheet = sheet_name(&target.label, strategy);
    let request_url = pagespeed::build_request_url_at(
        endpoint,
        strategy,
        &target.url,
        &config.api_key,
        &CATEGORIES,
    );

    let body = match fetch_with_retry(
        client,
        &request_url,
        config.retries,
        Duration::from_millis(config.retry_delay_ms),
    )
    .await
    {
        Ok(body) => body,
        Err(e) => {
            error!("API Request failed for {} ({}): {}", target.url, strategy, e);
            workbook.append_row(&sheet, &api_error_row(timestamp))?;
            return Ok(());
        }
    };

    match extract_report(&body, strategy, &target.url, timestamp) {
        Ok(report) => {
            info!(
                "Recorded {} ({}): performance {}",
                target.url, strategy, report.performance
            );
            workbook.append_row(&sheet, &report.to_row())?;
        }
        Err(ApiError::NoLabData { .. }) => {
            warn!(
                "API returned field data (CrUX) instead of Lighthouse data for {} ({})",
                target.url, strategy
            );
            workbook.append_row(&sheet, &crux_only_row(timestamp))?;
        }
        Err(e) => {
            error!("Could not extract report for {} ({}): {}", target.url, strategy, e);
            workbook.append_row(&sheet, &api_error_row(timestamp))?;
        }
    }
    Ok(())
}
