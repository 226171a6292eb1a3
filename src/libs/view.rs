use crate::libs::formatter::{format_clock, format_duration};
use crate::libs::summary::Totals;
use crate::libs::task::Task;
use prettytable::{row, Table};

/// Console table rendering for tasks and totals.
pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DATE", "FOCUSED", "DONE"]);
        for task in tasks {
            table.add_row(row![
                &task.id.to_string()[..8],
                task.name,
                task.date.format("%d %b %H:%M"),
                format_duration(task.pomodoro_quantity),
                if task.completed { "x" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn totals(totals: &Totals) {
        let mut table = Table::new();

        table.add_row(row!["PENDING", "COMPLETED", "FOCUSED TOTAL"]);
        table.add_row(row![totals.to_be_completed, totals.completed, format_duration(totals.estimated_time)]);
        table.printstd();
    }

    /// Single-line countdown readout, redrawn in place by the timer loop.
    pub fn clock_line(remaining_seconds: u32, elapsed_seconds: u32, running: bool) -> String {
        format!(
            "\r{} {}  (elapsed {})   ",
            if running { "▶" } else { "⏸" },
            format_clock(remaining_seconds),
            format_clock(elapsed_seconds)
        )
    }
}
