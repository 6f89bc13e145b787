//! Console rendering: per-day progress and the final summary block.

use std::io::{self, Write};

use stocksim_inventory::{DailyRecord, InventoryItem};
use stocksim_simulation::{DayObserver, Roster, RunReport};

/// Prints "Day N" followed by each item's remaining stock.
///
/// Observer hooks cannot fail, so the first write error is kept and returned
/// from [`ConsoleProgress::finish`].
pub struct ConsoleProgress<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> DayObserver for ConsoleProgress<W> {
    fn on_day_start(&mut self, day: u32) {
        self.write(format_args!("Day {day}\n"));
    }

    fn on_item_day(&mut self, item: &InventoryItem, record: &DailyRecord) {
        self.write(format_args!(
            " - {}: {} left in stock\n",
            item.name(),
            record.end_stock
        ));
    }

    fn on_day_end(&mut self, _day: u32, _roster: &Roster) {
        self.write(format_args!("\n"));
    }
}

pub fn print_summary<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, "\n--- Final Inventory Summary ---")?;
    for summary in report.summaries() {
        writeln!(out, "{}:", summary.name)?;
        writeln!(out, "  Final Stock       : {}", summary.final_stock)?;
        writeln!(out, "  Total Used        : {}", summary.total_used)?;
        writeln!(out, "  Total Restocked   : {}", summary.total_restocked)?;
        writeln!(out, "  Times Unavailable : {}\n", summary.total_unavailable)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stocksim_inventory::{ItemSpec, SequenceDemand};
    use stocksim_simulation::{run, run_with_observer};

    fn roster() -> Roster {
        Roster::from_specs(&[
            ItemSpec::new("Nail Polish", 60, 20, 50),
            ItemSpec::new("Acrylic Powder", 5, 20, 50),
        ])
        .unwrap()
    }

    #[test]
    fn progress_lists_items_per_day() {
        let mut roster = roster();
        let mut progress = ConsoleProgress::new(Vec::new());

        run_with_observer(1, &mut roster, &mut SequenceDemand::constant(12), &mut progress);

        let text = String::from_utf8(progress.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "Day 1\n - Nail Polish: 48 left in stock\n - Acrylic Powder: 50 left in stock\n\n"
        );
    }

    #[test]
    fn summary_block_lists_every_counter() {
        let mut roster = roster();
        run(1, &mut roster, &mut SequenceDemand::constant(12));
        let now = Utc::now();
        let report = RunReport::from_roster(&roster, 1, None, now, now);

        let mut out = Vec::new();
        print_summary(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("--- Final Inventory Summary ---"));
        assert!(text.contains("Acrylic Powder:\n  Final Stock       : 50\n"));
        assert!(text.contains("  Total Used        : 5\n"));
        assert!(text.contains("  Total Restocked   : 50\n"));
        assert!(text.contains("  Times Unavailable : 7\n"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface_on_finish() {
        let mut roster = roster();
        let mut progress = ConsoleProgress::new(FailingWriter);
        run_with_observer(2, &mut roster, &mut SequenceDemand::constant(1), &mut progress);

        let err = progress.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // The run itself is unaffected by the broken console.
        assert_eq!(roster.get("Nail Polish").unwrap().records().len(), 2);
    }
}
