//! CLI output formatting.
//!
//! Progress is the only thing the batch reports: a header, one line per
//! entry as a worker picks it up, and a closing count. Per-entry outcomes
//! are not reported.
//!
//! ```text
//! Splitting images (3 entries, 8 workers)
//! Splitting scans/page-01.tif
//! Splitting scans/page-03.tif
//! Splitting scans/page-02.tif
//! Dispatched 3 entries
//! ```
//!
//! Format functions return `Vec<String>` and do no I/O; `main` prints them
//! from its printer thread.

use crate::dispatch::DispatchEvent;

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format a single dispatch progress event as display lines.
pub fn format_dispatch_event(event: &DispatchEvent) -> Vec<String> {
    match event {
        DispatchEvent::Started { total, workers } => vec![format!(
            "Splitting images ({}, {})",
            plural(*total, "entry", "entries"),
            plural(*workers, "worker", "workers")
        )],
        DispatchEvent::EntryStarted { path } => {
            vec![format!("Splitting {}", path.display())]
        }
        DispatchEvent::Finished { dispatched } => {
            vec![format!(
                "Dispatched {}",
                plural(*dispatched, "entry", "entries")
            )]
        }
    }
}
