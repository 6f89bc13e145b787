//! Inventory domain module.
//!
//! This crate contains the per-item ledger: stock state, the daily
//! consume/shortfall/reorder rule and the append-only day history. It is pure
//! domain logic; randomness comes in through [`DemandSource`].

pub mod demand;
pub mod item;

pub use demand::{DemandSource, RandomDemand, SequenceDemand, MAX_DAILY_DEMAND, MIN_DAILY_DEMAND};
pub use item::{DailyRecord, InventoryItem, ItemSpec, ItemSummary, RecordDemand, ReorderPolicy};
