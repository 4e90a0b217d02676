//! Derived-view rendering: list rows, counters, empty state.

use std::io::Write;

use anyhow::Result;

use crate::domain::task::Stats;
use crate::services::notification::Notifier;
use crate::services::task_service::TaskService;

/// Print the filtered list followed by the stat line. The empty-state
/// message reflects the unfiltered sequence: a filter that matches
/// nothing still prints the (empty) listing and the counters.
pub fn list<W: Write, N: Notifier>(out: &mut W, service: &TaskService<N>) -> Result<()> {
    if service.tasks().is_empty() {
        writeln!(out, "No tasks yet. Add one to get started!")?;
        return Ok(());
    }

    for task in service.filtered_tasks() {
        writeln!(
            out,
            "{} {:>13}  {}  (added {})",
            if task.completed { "[x]" } else { "[ ]" },
            task.id,
            task.text,
            task.created_at,
        )?;
    }
    stats(out, service.stats())
}

pub fn stats<W: Write>(out: &mut W, stats: Stats) -> Result<()> {
    writeln!(out, "{} task(s), {} completed", stats.total, stats.completed)?;
    Ok(())
}
