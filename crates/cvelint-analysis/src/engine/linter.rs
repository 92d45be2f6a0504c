//! The validation engine.
//!
//! One task per file runs on a bounded rayon pool. Findings and file errors
//! flow through two bounded crossbeam channels, each drained by its own
//! collector thread. The run waits for the pool, drops the last senders,
//! joins both collectors and then sorts.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};
use cvelint_core::config::ScanConfig;
use cvelint_core::constants::DEFAULT_CHANNEL_CAPACITY;
use cvelint_core::errors::EngineError;
use cvelint_core::types::FxHashSet;
use cvelint_core::RecordId;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ordering::{order_file_errors, order_findings, SequencedFinding};
use super::types::{FileError, FileOutcome, Finding, RunReport, SkipReason};
use crate::record::Record;
use crate::rules::RuleDescriptor;

/// Sending halves of the two aggregation sinks, cloned per worker.
#[derive(Clone)]
struct Sinks {
    findings: Sender<SequencedFinding>,
    errors: Sender<FileError>,
}

impl Sinks {
    // A send only fails once the collector is gone, which surfaces at join.
    fn finding(&self, finding: SequencedFinding) {
        let _ = self.findings.send(finding);
    }

    fn file_error(&self, error: FileError) {
        let _ = self.errors.send(error);
    }
}

/// Runs a fixed rule subset over a set of record files.
#[derive(Debug, Clone)]
pub struct LintEngine {
    rules: Vec<RuleDescriptor>,
    organization: Option<String>,
    threads: usize,
    channel_capacity: usize,
}

impl LintEngine {
    /// Create an engine that evaluates `rules` in the given order.
    pub fn new(rules: Vec<RuleDescriptor>) -> Self {
        Self {
            rules,
            organization: None,
            threads: 0,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Only check records assigned by `organization`.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization.filter(|org| !org.is_empty());
        self
    }

    /// Worker count; 0 uses one worker per core.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Bound of each collector channel; clamped to at least 1.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Apply the `[scan]` settings.
    pub fn with_scan_config(self, scan: &ScanConfig) -> Self {
        self.with_threads(scan.effective_threads())
            .with_channel_capacity(scan.effective_channel_capacity())
    }

    /// Selected rules, in the order they run against each record.
    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    /// Check every file and return the ordered report.
    ///
    /// Per-file failures are recorded in the report; only failures to set up
    /// the pool or collectors are returned as errors.
    pub fn run(&self, files: &[PathBuf]) -> Result<RunReport, EngineError> {
        let start = Instant::now();
        let files = unique_paths(files);
        info!(
            files = files.len(),
            rules = self.rules.len(),
            organization = self.organization.as_deref().unwrap_or(""),
            "starting lint run"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("cvelint-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        let (finding_tx, finding_rx) = bounded::<SequencedFinding>(self.channel_capacity);
        let (error_tx, error_rx) = bounded::<FileError>(self.channel_capacity);
        let finding_collector = spawn_collector("findings", finding_rx)?;
        let error_collector = spawn_collector("errors", error_rx)?;

        let checked = AtomicUsize::new(0);
        let sinks = Sinks {
            findings: finding_tx,
            errors: error_tx,
        };
        pool.install(|| {
            files.par_iter().for_each_with(sinks, |sinks, path| {
                let outcome = self.check_file(path, sinks);
                if matches!(outcome, FileOutcome::Checked { .. }) {
                    checked.fetch_add(1, Ordering::Relaxed);
                }
            });
        });
        // Every sender clone has been dropped with its worker; the
        // collectors see disconnect once their buffers are drained.

        let findings = join_collector("findings", finding_collector)?;
        let file_errors = join_collector("errors", error_collector)?;

        let report = RunReport {
            findings: order_findings(findings),
            file_errors: order_file_errors(file_errors),
            files_checked: checked.load(Ordering::Relaxed),
            files_collected: files.len(),
        };
        info!(
            files_checked = report.files_checked,
            findings = report.findings.len(),
            file_errors = report.file_errors.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "lint run complete"
        );
        Ok(report)
    }

    /// Drive one file to its terminal state, emitting into `sinks`.
    fn check_file(&self, path: &Path, sinks: &Sinks) -> FileOutcome {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "could not read file");
                sinks.file_error(FileError::unreadable(path, &e));
                return FileOutcome::ReadFailed;
            }
        };
        let document: Value = match serde_json::from_slice(&content) {
            Ok(document) => document,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "file contains invalid JSON");
                sinks.file_error(FileError::invalid_json(path, &e));
                return FileOutcome::ParseFailed;
            }
        };

        let Some(record) = Record::classify(RecordId::from_path(path), document) else {
            debug!(file = %path.display(), "no assigning organization, skipping");
            return FileOutcome::Skipped(SkipReason::NoOrganization);
        };
        if let Some(ref organization) = self.organization {
            if record.organization() != organization {
                debug!(
                    file = %path.display(),
                    organization = record.organization(),
                    "organization filtered out"
                );
                return FileOutcome::Skipped(SkipReason::OrganizationFiltered);
            }
        }

        let mut emitted = 0;
        for (rule_ordinal, rule) in self.rules.iter().enumerate() {
            for (emit_ordinal, violation) in rule.check(&record).into_iter().enumerate() {
                sinks.finding(SequencedFinding {
                    rule_ordinal,
                    emit_ordinal,
                    finding: Finding::new(&record, path, rule, violation),
                });
                emitted += 1;
            }
        }
        debug!(file = %path.display(), findings = emitted, "checked");
        FileOutcome::Checked { findings: emitted }
    }
}

/// Drop repeated paths, keeping the first occurrence.
fn unique_paths(files: &[PathBuf]) -> Vec<&PathBuf> {
    let mut seen: FxHashSet<&PathBuf> = FxHashSet::default();
    let unique: Vec<&PathBuf> = files.iter().filter(|path| seen.insert(*path)).collect();
    if unique.len() != files.len() {
        debug!(dropped = files.len() - unique.len(), "duplicate input paths dropped");
    }
    unique
}

fn spawn_collector<T: Send + 'static>(
    sink: &'static str,
    rx: Receiver<T>,
) -> Result<JoinHandle<Vec<T>>, EngineError> {
    thread::Builder::new()
        .name(format!("cvelint-{sink}"))
        .spawn(move || rx.into_iter().collect())
        .map_err(|source| EngineError::CollectorSpawn { sink, source })
}

fn join_collector<T>(sink: &'static str, handle: JoinHandle<Vec<T>>) -> Result<Vec<T>, EngineError> {
    handle
        .join()
        .map_err(|_| EngineError::CollectorPanicked { sink })
}
