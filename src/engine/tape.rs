// Calculation tape
//
// Completed computations (equals and unary applications) are recorded as
// tape entries. The tape lives in memory only; nothing is persisted across
// runs. Entries serialize to JSON for the clipboard export path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed computation on the tape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapeEntry {
    pub timestamp: DateTime<Utc>,
    /// Human-readable expression, e.g. "5 + 3" or "√9"
    pub expression: String,
    /// Formatted result as it appeared on the display
    pub result: String,
}

impl TapeEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// One-line rendering for the tape panel
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Render tape entries as JSON lines, newest last
pub fn to_json_lines(entries: &[TapeEntry]) -> String {
    entries
        .iter()
        .filter_map(|e| serde_json::to_string(e).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_joins_expression_and_result() {
        let entry = TapeEntry::new("5 + 3", "8");
        assert_eq!(entry.line(), "5 + 3 = 8");
    }

    #[test]
    fn json_lines_one_entry_per_line() {
        let entries = vec![TapeEntry::new("5 + 3", "8"), TapeEntry::new("√9", "3")];
        let jsonl = to_json_lines(&entries);
        assert_eq!(jsonl.lines().count(), 2);

        // Each line parses back as an entry
        for line in jsonl.lines() {
            let parsed: TapeEntry = serde_json::from_str(line).unwrap();
            assert!(!parsed.expression.is_empty());
        }
    }

    #[test]
    fn json_lines_empty_tape_is_empty_string() {
        assert_eq!(to_json_lines(&[]), "");
    }
}
