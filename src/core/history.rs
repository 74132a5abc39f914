//! Calculation history.
//!
//! Provides an immutable, capacity-bounded log of past calculations,
//! following functional programming principles.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Maximum number of calculations kept in the log.
pub const HISTORY_CAPACITY: usize = 50;

/// Number of entries shown in the recent-history view.
pub const RECENT_VIEW_LEN: usize = 10;

/// Record of a single successful calculation.
///
/// Entries are immutable values. The timestamp is a human-readable local
/// time, stored as text so persisted logs read back exactly as displayed.
///
/// # Example
///
/// ```rust
/// use calculon::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2+2", "4", "1/2/2026, 3:04:05 PM");
/// assert_eq!(entry.summary(), "2+2 = 4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression that was submitted
    pub expression: String,
    /// The result the service returned
    pub result: String,
    /// When the calculation completed
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create an entry stamped with the current local time.
    pub fn now(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(expression, result, format_timestamp(Local::now()))
    }

    /// One-line `expression = result` form.
    pub fn summary(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Format a local time as `M/D/YYYY, h:mm:ss AM`.
pub fn format_timestamp(time: chrono::DateTime<Local>) -> String {
    time.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Ordered log of calculations, oldest first.
///
/// The log is immutable - [`record`](Self::record) returns a new log with
/// the entry added and the oldest entries evicted past
/// [`HISTORY_CAPACITY`].
///
/// # Example
///
/// ```rust
/// use calculon::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new()
///     .record(HistoryEntry::new("1+1", "2", "t1"))
///     .record(HistoryEntry::new("2*3", "6", "t2"));
///
/// let recent = log.recent(10);
/// assert_eq!(recent[0].expression, "2*3");
/// assert_eq!(recent[1].expression, "1+1");
/// assert_eq!(log.summary().as_deref(), Some("2*3 = 6"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a log from stored entries, keeping only the newest
    /// [`HISTORY_CAPACITY`].
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        if entries.len() > HISTORY_CAPACITY {
            entries.drain(..entries.len() - HISTORY_CAPACITY);
        }
        Self { entries }
    }

    /// Record an entry, returning a new log.
    ///
    /// This is a pure function - the existing log is left unchanged.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// The last `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Summary line of the newest entry.
    pub fn summary(&self) -> Option<String> {
        self.entries.last().map(HistoryEntry::summary)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{i}+0"), i.to_string(), "ts")
    }

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.recent(RECENT_VIEW_LEN).is_empty());
        assert!(log.summary().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.record(entry(1));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let log = (1..=HISTORY_CAPACITY + 1).fold(HistoryLog::new(), |log, i| log.record(entry(i)));

        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.entries()[0], entry(2));
        assert_eq!(log.entries()[HISTORY_CAPACITY - 1], entry(HISTORY_CAPACITY + 1));
    }

    #[test]
    fn recent_is_newest_first_and_bounded() {
        let log = (1..=15).fold(HistoryLog::new(), |log, i| log.record(entry(i)));

        let recent = log.recent(RECENT_VIEW_LEN);

        assert_eq!(recent.len(), RECENT_VIEW_LEN);
        assert_eq!(recent[0], &entry(15));
        assert_eq!(recent[9], &entry(6));
        assert_eq!(log.len(), 15);
    }

    #[test]
    fn from_entries_truncates_oversized_logs() {
        let entries: Vec<_> = (0..60).map(entry).collect();
        let log = HistoryLog::from_entries(entries);

        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.entries()[0], entry(10));
    }

    #[test]
    fn summary_uses_newest_entry() {
        let log = HistoryLog::new()
            .record(HistoryEntry::new("1+1", "2", "a"))
            .record(HistoryEntry::new("3*3", "9", "b"));
        assert_eq!(log.summary().as_deref(), Some("3*3 = 9"));
    }

    #[test]
    fn timestamp_format_is_locale_style() {
        let time = Local.with_ymd_and_hms(2026, 3, 7, 14, 5, 9).unwrap();
        assert_eq!(format_timestamp(time), "3/7/2026, 2:05:09 PM");
    }

    #[test]
    fn now_stamps_entry() {
        let entry = HistoryEntry::now("2+2", "4");
        assert!(!entry.timestamp.is_empty());
    }

    #[test]
    fn history_serializes_as_plain_list() {
        let log = HistoryLog::new().record(HistoryEntry::new("2+2", "4", "ts"));

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"expression":"2+2","result":"4","timestamp":"ts"}]"#);

        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
