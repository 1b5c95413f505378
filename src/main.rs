use log::info;
use reqwest::Client;
use tracing_subscriber;

mod config;
mod error;
mod fetch;
mod models;
mod pagespeed;
mod sheet;
mod tracker;

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "🚀 Running PageSpeed measurement for {} target(s)",
        config.targets.len()
    );

    let client = Client::new();
    let workbook = sheet::Workbook::new(&config.output_dir);

    if let Err(e) = tracker::run_tracker(&config, &client, &workbook).await {
        eprintln!("Measurement run failed: {:#}", e);
        std::process::exit(1);
    }

    info!("✅ Measurement run complete, reports in {}", config.output_dir);
}
