//! Text Gantt chart rendering.

use std::fmt::Write;

use crate::models::Timeline;

/// Renders one row per pid, `#` where the process held the CPU.
///
/// When the makespan exceeds `max_width` columns, each column covers
/// several time units and is marked if the process ran in any of them.
pub fn render_gantt(timeline: &Timeline, pids: &[i64], max_width: usize) -> String {
    let makespan = timeline.makespan();
    if makespan <= 0 || pids.is_empty() {
        return String::new();
    }

    let max_width = max_width.max(1) as i64;
    // Ceiling divisions written to stay in range when makespan is near i64::MAX
    let units_per_col = (makespan - 1) / max_width + 1;
    let columns = ((makespan - 1) / units_per_col + 1) as usize;

    let labels: Vec<String> = pids.iter().map(|pid| format!("P{pid}")).collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (pid, label) in pids.iter().zip(&labels) {
        let mut row = vec!['.'; columns];
        for slice in timeline.slices_for(*pid) {
            let first = (slice.start / units_per_col) as usize;
            let last = ((slice.end() - 1) / units_per_col) as usize;
            for cell in &mut row[first..=last.min(columns - 1)] {
                *cell = '#';
            }
        }
        let row: String = row.into_iter().collect();
        let _ = writeln!(out, "{label:>label_width$} |{row}|");
    }

    let _ = write!(out, "{:label_width$}  t=0..{makespan}", "");
    if units_per_col > 1 {
        let _ = write!(out, " (1 column = {units_per_col} units)");
    }
    out.push('\n');
    out
}
