use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocksim_inventory::{DailyRecord, ItemSummary};

use crate::roster::Roster;

/// One item's results after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub summary: ItemSummary,
    pub records: Vec<DailyRecord>,
}

/// A daily record tagged with its item, for tables that mix items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDayRow {
    #[serde(rename = "Day")]
    pub day: u32,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Start Stock")]
    pub start_stock: u64,
    #[serde(rename = "Demand")]
    pub demand: u64,
    #[serde(rename = "Used Today")]
    pub used_today: u64,
    #[serde(rename = "Restocked")]
    pub restocked: u64,
    #[serde(rename = "End Stock")]
    pub end_stock: u64,
    #[serde(rename = "Unavailable")]
    pub unavailable: u64,
}

impl ItemDayRow {
    pub fn new(product: &str, record: &DailyRecord) -> Self {
        Self {
            day: record.day,
            product: product.to_string(),
            start_stock: record.start_stock,
            demand: record.demand,
            used_today: record.used_today,
            restocked: record.restocked,
            end_stock: record.end_stock,
            unavailable: record.unavailable,
        }
    }
}

/// Snapshot of a finished run, detached from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub days: u32,
    pub seed: Option<u64>,
    pub items: Vec<ItemReport>,
}

impl RunReport {
    pub fn from_roster(
        roster: &Roster,
        days: u32,
        seed: Option<u64>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let items = roster
            .items()
            .iter()
            .map(|item| ItemReport {
                summary: item.summary(),
                records: item.records().to_vec(),
            })
            .collect();

        Self {
            started_at,
            finished_at,
            days,
            seed,
            items,
        }
    }

    pub fn summaries(&self) -> impl Iterator<Item = &ItemSummary> {
        self.items.iter().map(|i| &i.summary)
    }

    /// All items' records concatenated in roster order (item-major).
    pub fn combined_records(&self) -> Vec<ItemDayRow> {
        self.items
            .iter()
            .flat_map(|item| {
                let name = item.summary.name.as_str();
                item.records.iter().map(move |r| ItemDayRow::new(name, r))
            })
            .collect()
    }

    /// Serialized without the per-day records.
    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "started_at": self.started_at,
            "finished_at": self.finished_at,
            "days": self.days,
            "seed": self.seed,
            "items": self.summaries().collect::<Vec<_>>(),
        })
    }
}
