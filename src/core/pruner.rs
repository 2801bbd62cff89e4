//! The list → filter → delete loop.

use crate::constants;
use crate::core::filter::TargetFilter;
use crate::core::store::{CredentialStore, StoreError};
use crate::models::report::{DeleteAttempt, DeleteOutcome, PruneReport};
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;
use tracing::{debug, info, trace, warn};

pub struct Pruner<'a, S: CredentialStore + ?Sized> {
    store: &'a S,
    filter: &'a TargetFilter,
    dry_run: bool,
}

impl<'a, S: CredentialStore + ?Sized> Pruner<'a, S> {
    pub fn new(store: &'a S, filter: &'a TargetFilter) -> Self {
        Self {
            store,
            filter,
            dry_run: false,
        }
    }

    /// Announce matches without calling the store's delete.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run one pass over the store's listing, writing the console lines to `out`.
    ///
    /// Store failures never abort the pass: a failed listing counts as an
    /// empty one and a failed delete is recorded in the report. Only write
    /// errors on `out` are returned.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<PruneReport> {
        let mut report = PruneReport::new();

        let lines = match self.store.list_lines() {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "could not list credentials");
                report.list_error = Some(e.to_string());
                Vec::new()
            }
        };

        for line in &lines {
            report.lines += 1;
            if !self.filter.matches(line) {
                trace!(line = %line, "no match");
                continue;
            }
            report.matched += 1;

            let Some(target) = self.filter.extract_identifier(line) else {
                continue;
            };
            if !self.filter.should_delete(&target) {
                debug!(line = %line, "empty target, skipping");
                report.empty += 1;
                continue;
            }

            writeln!(out, "{}", self.filter.announcement(&target))
                .context("write to output")?;
            let outcome = self.delete(&target);
            report.attempts.push(DeleteAttempt { target, outcome });
        }

        info!(
            lines = report.lines,
            matched = report.matched,
            deleted = report.deleted(),
            failed = report.failed(),
            "prune finished"
        );
        writeln!(out, "{}", constants::DONE_MESSAGE).context("write to output")?;
        report.finished_at = Some(Utc::now());
        Ok(report)
    }

    fn delete(&self, target: &str) -> DeleteOutcome {
        if self.dry_run {
            debug!(credential = target, "dry run, not deleting");
            return DeleteOutcome::Skipped;
        }
        match self.store.delete(target) {
            Ok(()) => {
                debug!(credential = target, "deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(credential = target, error = %e, "delete failed");
                DeleteOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Targets the filter would act on, without deleting anything.
pub fn matching_targets<S: CredentialStore + ?Sized>(
    store: &S,
    filter: &TargetFilter,
) -> Result<Vec<String>, StoreError> {
    let lines = store.list_lines()?;
    Ok(lines
        .iter()
        .filter(|line| filter.matches(line))
        .filter_map(|line| filter.extract_identifier(line))
        .filter(|target| filter.should_delete(target))
        .collect())
}
