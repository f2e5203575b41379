//! Output sinks for match reports.
//!
//! The three axis scans of one word run concurrently and all report into the same sink,
//! so a sink is the only shared mutable state of a search. Implementations serialize
//! each report behind a `Mutex`: one record is always written or stored whole.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;

use crate::record::MatchRecord;

/// Receives match records as scanners find them, possibly from several threads at once.
pub trait MatchSink: Send + Sync {
    fn report(&self, record: &MatchRecord);
}

/// Lock a mutex, recovering the data if another reporter panicked mid-write.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Collects every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<MatchRecord>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> CollectingSink {
        CollectingSink::default()
    }

    /// Snapshot of the records collected so far.
    #[must_use]
    pub fn records(&self) -> Vec<MatchRecord> {
        lock(&self.records).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        lock(&self.records).clear();
    }

    #[must_use]
    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MatchSink for CollectingSink {
    fn report(&self, record: &MatchRecord) {
        lock(&self.records).push(record.clone());
    }
}

/// Writes one line per record to any `Write` (stdout in the CLI).
///
/// Write failures are logged and otherwise ignored: a scan always runs to completion.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(out: W) -> WriterSink<W> {
        WriterSink { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> MatchSink for WriterSink<W> {
    fn report(&self, record: &MatchRecord) {
        let mut out = lock(&self.out);
        if let Err(e) = writeln!(out, "{record}").and_then(|()| out.flush()) {
            warn!("failed to write match report: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Axis;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.report(&MatchRecord::new("A", Axis::Horizontal, (1, 1)));
        sink.report(&MatchRecord::new("B", Axis::Vertical, (2, 1)));
        let words: Vec<String> = sink.records().into_iter().map(|r| r.word).collect();
        assert_eq!(words, vec!["A", "B"]);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_writer_sink_writes_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.report(&MatchRecord::new("CAT", Axis::Horizontal, (1, 2)));
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Word 'CAT' found in row 1, starting at column 2 (horizontal)\n");
    }

    #[test]
    fn test_concurrent_reports_stay_whole() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let handles: Vec<_> = Axis::ALL
            .into_iter()
            .map(|axis| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for n in 1..=200 {
                        sink.report(&MatchRecord::new("WORD", axis, (n, n)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let sink = Arc::try_unwrap(sink).ok().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 600);
        assert!(lines.iter().all(|l| l.starts_with("Word 'WORD' found ")));
    }
}
