use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use stocksim_core::{Aggregate, AggregateRoot, DomainError, DomainResult, ItemName};

use crate::demand::{DemandSource, MAX_DAILY_DEMAND, MIN_DAILY_DEMAND};

/// Replenishment rule for one item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    /// Stock level at or below which a reorder fires.
    pub threshold: u64,
    /// Quantity added per reorder (always > 0).
    pub amount: u64,
}

impl ReorderPolicy {
    pub fn new(threshold: i64, amount: i64) -> DomainResult<Self> {
        let threshold = u64::try_from(threshold).map_err(|_| {
            DomainError::invalid_configuration(format!(
                "reorder_threshold cannot be negative (got {threshold})"
            ))
        })?;
        if amount <= 0 {
            return Err(DomainError::invalid_configuration(format!(
                "reorder_amount must be positive (got {amount})"
            )));
        }
        Ok(Self {
            threshold,
            amount: amount as u64,
        })
    }

    /// Evaluated against post-consumption stock.
    pub fn should_reorder(&self, stock: u64) -> bool {
        stock <= self.threshold
    }
}

/// Caller-supplied item definition, as read from configuration.
///
/// Signed on purpose: out-of-range values are rejected by
/// [`InventoryItem::from_spec`] instead of failing somewhere in deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub stock: i64,
    pub reorder_threshold: i64,
    pub reorder_amount: i64,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, stock: i64, reorder_threshold: i64, reorder_amount: i64) -> Self {
        Self {
            name: name.into(),
            stock,
            reorder_threshold,
            reorder_amount,
        }
    }
}

/// Command: RecordDemand (one simulated day with an already-drawn demand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDemand {
    pub day: u32,
    pub demand: u64,
}

/// Event: what happened to one item on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: u32,
    pub start_stock: u64,
    /// Units requested.
    pub demand: u64,
    /// Units actually consumed: `min(demand, start_stock)`.
    pub used_today: u64,
    /// Either 0 or the policy's reorder amount.
    pub restocked: u64,
    pub end_stock: u64,
    /// Demand unmet from the day's starting stock.
    pub unavailable: u64,
}

/// Flat accumulated view of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: ItemName,
    pub final_stock: u64,
    pub total_used: u64,
    pub total_restocked: u64,
    pub total_unavailable: u64,
}

/// Aggregate root: InventoryItem (one tracked product and its day ledger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    name: ItemName,
    stock: u64,
    policy: ReorderPolicy,
    total_restocked: u64,
    total_used: u64,
    total_unavailable: u64,
    history: Vec<DailyRecord>,
    version: u64,
}

impl InventoryItem {
    /// Create an item, failing fast on negative stock/threshold or a
    /// non-positive reorder amount.
    pub fn new(
        name: impl AsRef<str>,
        stock: i64,
        reorder_threshold: i64,
        reorder_amount: i64,
    ) -> DomainResult<Self> {
        let name = ItemName::new(name)?;
        let stock = u64::try_from(stock).map_err(|_| {
            DomainError::invalid_configuration(format!("{name}: stock cannot be negative (got {stock})"))
        })?;
        let policy = ReorderPolicy::new(reorder_threshold, reorder_amount).map_err(|e| match e {
            DomainError::InvalidConfiguration(msg) => {
                DomainError::invalid_configuration(format!("{name}: {msg}"))
            }
            other => other,
        })?;

        Ok(Self {
            name,
            stock,
            policy,
            total_restocked: 0,
            total_used: 0,
            total_unavailable: 0,
            history: Vec::new(),
            version: 0,
        })
    }

    pub fn from_spec(spec: &ItemSpec) -> DomainResult<Self> {
        Self::new(&spec.name, spec.stock, spec.reorder_threshold, spec.reorder_amount)
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn policy(&self) -> ReorderPolicy {
        self.policy
    }

    /// Simulate one day: draw demand from `[1, 15]`, consume, reorder if low.
    pub fn advance_day<D>(&mut self, day: u32, demand: &mut D) -> DailyRecord
    where
        D: DemandSource + ?Sized,
    {
        let drawn = demand.next_in(MIN_DAILY_DEMAND, MAX_DAILY_DEMAND);
        self.record_demand(RecordDemand { day, demand: drawn })
    }

    /// Simulate one day with a known demand.
    pub fn record_demand(&mut self, command: RecordDemand) -> DailyRecord {
        let Ok(events) = self.handle(&command);
        let &[record] = events.as_slice() else {
            unreachable!("handle emits exactly one record per day");
        };
        self.apply(&record);

        if record.restocked > 0 {
            tracing::debug!(
                item = %self.name,
                day = record.day,
                restocked = record.restocked,
                end_stock = record.end_stock,
                "reorder triggered"
            );
        }
        if record.unavailable > 0 {
            tracing::debug!(
                item = %self.name,
                day = record.day,
                unavailable = record.unavailable,
                "demand exceeded stock"
            );
        }

        record
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            name: self.name.clone(),
            final_stock: self.stock,
            total_used: self.total_used,
            total_restocked: self.total_restocked,
            total_unavailable: self.total_unavailable,
        }
    }

    /// Full day history, in day order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.history
    }

    fn decide(&self, command: &RecordDemand) -> DailyRecord {
        let start_stock = self.stock;
        let used_today = command.demand.min(start_stock);
        let unavailable = command.demand.saturating_sub(start_stock);
        let remaining = start_stock - used_today;

        let restocked = if self.policy.should_reorder(remaining) {
            self.policy.amount
        } else {
            0
        };

        DailyRecord {
            day: command.day,
            start_stock,
            demand: command.demand,
            used_today,
            restocked,
            end_stock: remaining + restocked,
            unavailable,
        }
    }
}

impl AggregateRoot for InventoryItem {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for InventoryItem {
    type Command = RecordDemand;
    type Event = DailyRecord;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        self.stock = event.end_stock;
        self.total_used += event.used_today;
        self.total_restocked += event.restocked;
        self.total_unavailable += event.unavailable;
        self.history.push(*event);

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(vec![self.decide(command)])
    }
}
