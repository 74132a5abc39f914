//! What the presentation layer shows after each operation.

use crate::core::HistoryEntry;

/// Snapshot of everything a display surface renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// The expression, `"0"` when empty
    pub expression: String,
    /// The last successful result
    pub result: String,
    /// Active error notice
    pub error: Option<String>,
    /// Active confirmation notice
    pub confirmation: Option<String>,
    /// `expression = result` of the newest history entry
    pub summary: Option<String>,
    /// Recent history, newest first
    pub recent: Vec<HistoryEntry>,
    /// An evaluation is in flight
    pub loading: bool,
}

impl DisplaySnapshot {
    /// Text for the result slot: an active error takes its place.
    pub fn result_line(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.result)
    }

    /// Text for the summary slot: an active confirmation takes its place.
    pub fn summary_line(&self) -> &str {
        self.confirmation
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DisplaySnapshot {
        DisplaySnapshot {
            expression: "2+2".into(),
            result: "4".into(),
            error: None,
            confirmation: None,
            summary: Some("2+2 = 4".into()),
            recent: Vec::new(),
            loading: false,
        }
    }

    #[test]
    fn plain_lines() {
        let snapshot = snapshot();
        assert_eq!(snapshot.result_line(), "4");
        assert_eq!(snapshot.summary_line(), "2+2 = 4");
    }

    #[test]
    fn notices_take_over_their_slots() {
        let snapshot = DisplaySnapshot {
            error: Some("Error: Invalid expression".into()),
            confirmation: Some("Memory cleared".into()),
            ..snapshot()
        };
        assert_eq!(snapshot.result_line(), "Error: Invalid expression");
        assert_eq!(snapshot.summary_line(), "Memory cleared");
    }

    #[test]
    fn empty_summary_slot() {
        let snapshot = DisplaySnapshot {
            summary: None,
            ..snapshot()
        };
        assert_eq!(snapshot.summary_line(), "");
    }
}
