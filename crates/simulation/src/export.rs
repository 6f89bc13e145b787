//! Tabular export of day records.
//!
//! One CSV per item, named `<slug>_inventory_log.csv`, one row per simulated
//! day. A combined file holds every item's rows for charting tools.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stocksim_core::ItemName;
use stocksim_inventory::InventoryItem;

use crate::report::{ItemDayRow, RunReport};
use crate::roster::Roster;

pub const COMBINED_FILE_NAME: &str = "combined_inventory_log.csv";
pub const SUMMARY_FILE_NAME: &str = "summary.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File name used for an item's log.
pub fn log_file_name(name: &ItemName) -> String {
    format!("{}_inventory_log.csv", name.slug())
}

/// Write an item's history as CSV into any writer.
pub fn write_item_csv<W: io::Write>(writer: W, item: &InventoryItem) -> Result<(), ExportError> {
    let rows = item
        .records()
        .iter()
        .map(|r| ItemDayRow::new(item.name().as_str(), r));
    write_rows(writer, rows)
}

fn write_rows<W, I>(writer: W, rows: I) -> Result<(), ExportError>
where
    W: io::Write,
    I: IntoIterator<Item = ItemDayRow>,
{
    let mut csv = csv::Writer::from_writer(writer);
    let mut wrote_any = false;
    for row in rows {
        csv.serialize(&row)?;
        wrote_any = true;
    }
    if !wrote_any {
        // serde-driven headers only appear with the first row.
        csv.write_record(HEADERS)?;
    }
    csv.flush()?;
    Ok(())
}

const HEADERS: [&str; 8] = [
    "Day",
    "Product",
    "Start Stock",
    "Demand",
    "Used Today",
    "Restocked",
    "End Stock",
    "Unavailable",
];

/// Writes run results into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn export_item(&self, item: &InventoryItem) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(log_file_name(item.name()));
        let file = fs::File::create(&path)?;
        write_item_csv(io::BufWriter::new(file), item)?;
        tracing::info!(item = %item.name(), path = %path.display(), rows = item.records().len(), "saved csv");
        Ok(path)
    }

    /// One file per item, in roster order.
    pub fn export_roster(&self, roster: &Roster) -> Result<Vec<PathBuf>, ExportError> {
        roster.items().iter().map(|item| self.export_item(item)).collect()
    }

    pub fn export_combined(&self, report: &RunReport) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(COMBINED_FILE_NAME);
        let file = fs::File::create(&path)?;
        write_rows(io::BufWriter::new(file), report.combined_records())?;
        tracing::info!(path = %path.display(), "saved combined csv");
        Ok(path)
    }

    pub fn export_summary(&self, report: &RunReport) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(SUMMARY_FILE_NAME);
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(io::BufWriter::new(file), &report.summary_json())?;
        tracing::info!(path = %path.display(), "saved summary");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksim_inventory::SequenceDemand;

    #[test]
    fn item_csv_has_header_and_one_row_per_day() {
        let mut item = InventoryItem::new("Nail Polish", 5, 20, 50).unwrap();
        item.advance_day(1, &mut SequenceDemand::constant(12));

        let mut out = Vec::new();
        write_item_csv(&mut out, &item).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Day,Product,Start Stock,Demand,Used Today,Restocked,End Stock,Unavailable",
                "1,Nail Polish,5,12,5,50,50,7",
            ]
        );
    }

    #[test]
    fn empty_history_still_writes_headers() {
        let item = InventoryItem::new("Nail Polish", 5, 20, 50).unwrap();
        let mut out = Vec::new();
        write_item_csv(&mut out, &item).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap().trim_end(),
            HEADERS.join(",")
        );
    }

    #[test]
    fn file_names_are_slugged() {
        let name = ItemName::new("Acrylic Powder").unwrap();
        assert_eq!(log_file_name(&name), "acrylic_powder_inventory_log.csv");
    }
}
