//! Result of a prune run.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// Dry run: announced but not sent to the store.
    Skipped,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteAttempt {
    pub target: String,
    #[serde(flatten)]
    pub outcome: DeleteOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct PruneReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Lines read from the listing.
    pub lines: usize,
    /// Lines whose target matched the pattern.
    pub matched: usize,
    /// Matches dropped because the identifier was empty.
    pub empty: usize,
    pub attempts: Vec<DeleteAttempt>,
    /// Set when the listing itself could not be obtained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_error: Option<String>,
}

impl PruneReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            lines: 0,
            matched: 0,
            empty: 0,
            attempts: Vec::new(),
            list_error: None,
        }
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, DeleteOutcome::Deleted))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DeleteOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, DeleteOutcome::Skipped))
    }

    /// Whether anything went wrong that `--strict` should surface.
    pub fn has_failures(&self) -> bool {
        self.list_error.is_some() || self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&DeleteOutcome) -> bool) -> usize {
        self.attempts.iter().filter(|a| pred(&a.outcome)).count()
    }
}

impl Default for PruneReport {
    fn default() -> Self {
        Self::new()
    }
}
