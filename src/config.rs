use crate::fetch::{DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS};
use crate::models::MeasurementTarget;
use anyhow::{Context, Result};
use dotenv::dotenv;
use std::fs::File;
use std::io::BufReader;

pub const DEFAULT_TARGETS_FILE: &str = "targets.json";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_PAIR_DELAY_MS: u64 = 1000;

// Everything the run needs, resolved once at startup and passed down.
// Nothing below this layer touches the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub targets: Vec<MeasurementTarget>,
    pub output_dir: String,
    pub retries: u32,
    pub retry_delay_ms: u64,
    pub pair_delay_ms: u64,
}

impl Config {
    pub fn load() -> Result<Config> {
        dotenv().ok();

        let api_key = std::env::var("PAGE_SPEED_API_KEY")
            .context("PAGE_SPEED_API_KEY environment variable not set")?;

        let targets_file = std::env::var("PAGEPULSE_TARGETS")
            .unwrap_or_else(|_| DEFAULT_TARGETS_FILE.to_string());
        let output_dir = std::env::var("PAGEPULSE_OUTPUT_DIR")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());

        let targets = load_targets(&targets_file)?;

        Ok(Config {
            api_key,
            targets,
            output_dir,
            retries: env_number("PAGEPULSE_RETRIES", DEFAULT_RETRIES as u64)? as u32,
            retry_delay_ms: env_number("PAGEPULSE_RETRY_DELAY_MS", DEFAULT_RETRY_DELAY_MS)?,
            pair_delay_ms: env_number("PAGEPULSE_PAIR_DELAY_MS", DEFAULT_PAIR_DELAY_MS)?,
        })
    }
}

fn load_targets(path: &str) -> Result<Vec<MeasurementTarget>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open targets file: {}", path))?;
    let targets: Vec<MeasurementTarget> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse targets file: {}", path))?;
    anyhow::ensure!(!targets.is_empty(), "Targets file is empty: {}", path);
    Ok(targets)
}

fn env_number(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} is not a number: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn targets_file_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("targets.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"url": "https://example.com/", "label": "Home"}}]"#
        )
        .unwrap();

        let targets = load_targets(path.to_str().unwrap()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].url, "https://example.com/");
        assert_eq!(targets[0].label, "Home");
    }

    #[test]
    fn empty_targets_file_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("targets.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(load_targets(path.to_str().unwrap()).is_err());
    }
}
