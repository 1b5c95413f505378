use crate::models::{Strategy, HEADERS};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

// The reference deployment's table store caps names at 31 characters
pub const MAX_SHEET_NAME_LEN: usize = 31;

// One CSV file per sheet under the output directory. The header row is
// written exactly once, when the file is created.
#[derive(Debug, Clone)]
pub struct Workbook {
    dir: PathBuf,
}

impl Workbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Workbook { dir: dir.into() }
    }

    pub fn append_row(&self, sheet: &str, row: &[String]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory: {}", self.dir.display()))?;

        let path = self.dir.join(format!("{}.csv", sheet));
        let is_new = !path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("Failed to open sheet: {}", path.display()))?;

        let mut writer = csv::Writer::from_writer(file);
        if is_new {
            writer
                .write_record(HEADERS)
                .with_context(|| format!("Failed to write header row: {}", path.display()))?;
        }
        writer
            .write_record(row)
            .with_context(|| format!("Failed to append row: {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", sheet))
    }
}

// Deterministic sheet name for a (target label, strategy) pair, sanitized
// and truncated to the store's naming limit
pub fn sheet_name(label: &str, strategy: Strategy) -> String {
    let raw = format!("{} {}", label, strategy);
    let sanitized = sanitize_sheet_name(&raw);
    sanitized.chars().take(MAX_SHEET_NAME_LEN).collect()
}

fn sanitize_sheet_name(name: &str) -> String {
    name.replace(
        |c: char| !c.is_alphanumeric() && c != '.' && c != ' ' && c != '-',
        "_",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_written_once() {
        let tmp = tempfile::tempdir().unwrap();
        let workbook = Workbook::new(tmp.path());

        let row: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        workbook.append_row("Home mobile", &row).unwrap();
        workbook.append_row("Home mobile", &row).unwrap();

        let contents = std::fs::read_to_string(workbook.sheet_path("Home mobile")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Timestamp,Performance,Accessibility"));
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let tmp = tempfile::tempdir().unwrap();
        let workbook = Workbook::new(tmp.path());

        let mut row: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        row.push("a,b".to_string());
        workbook.append_row("Quoting", &row).unwrap();

        let contents = std::fs::read_to_string(workbook.sheet_path("Quoting")).unwrap();
        assert!(contents.contains("\"a,b\""));
    }

    #[test]
    fn sheet_names_are_sanitized_and_bounded() {
        assert_eq!(sheet_name("Home", Strategy::Mobile), "Home mobile");
        assert_eq!(
            sheet_name("Pricing/Checkout", Strategy::Desktop),
            "Pricing_Checkout desktop"
        );

        let long = sheet_name(
            "A very long page label that overflows the limit",
            Strategy::Desktop,
        );
        assert_eq!(long.chars().count(), MAX_SHEET_NAME_LEN);
    }
}
