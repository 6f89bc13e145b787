//! Day-by-day simulation driver.
//!
//! Days run in ascending order starting at 1; within a day every item advances
//! once, in roster order. Demand is drawn from a single caller-owned source in
//! that same order, so a seeded source reproduces a run exactly.

use stocksim_inventory::{DailyRecord, DemandSource, InventoryItem};

use crate::roster::Roster;

/// Side-channel hooks for progress reporting.
///
/// All methods default to no-ops; the driver behaves identically with or
/// without an observer.
pub trait DayObserver {
    fn on_day_start(&mut self, _day: u32) {}

    fn on_item_day(&mut self, _item: &InventoryItem, _record: &DailyRecord) {}

    fn on_day_end(&mut self, _day: u32, _roster: &Roster) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DayObserver for NoopObserver {}

/// Run `days` days over the roster. `days == 0` leaves every history empty.
pub fn run<D>(days: u32, roster: &mut Roster, demand: &mut D)
where
    D: DemandSource + ?Sized,
{
    run_with_observer(days, roster, demand, &mut NoopObserver);
}

pub fn run_with_observer<D, O>(days: u32, roster: &mut Roster, demand: &mut D, observer: &mut O)
where
    D: DemandSource + ?Sized,
    O: DayObserver + ?Sized,
{
    let span = tracing::info_span!("simulation.run", days, items = roster.len());
    let _guard = span.enter();

    tracing::info!("simulation started");

    for day in 1..=days {
        observer.on_day_start(day);

        for item in roster.items_mut() {
            let record = item.advance_day(day, &mut *demand);
            observer.on_item_day(item, &record);
        }

        observer.on_day_end(day, roster);
    }

    tracing::info!(
        restocks = roster
            .items()
            .iter()
            .flat_map(|i| i.records())
            .filter(|r| r.restocked > 0)
            .count(),
        "simulation finished"
    );
}
