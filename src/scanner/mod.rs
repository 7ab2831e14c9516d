//! Scan orchestration for RST Warden
//!
//! CDD Principle: Domain Services - Scanner orchestrates the validation workflow
//! - Coordinates document discovery, per-line checks, and result aggregation
//! - Strictly sequential: each document is read, scanned, and closed before the
//!   next, so diagnostic ordering in the report is stable and attributable
//! - Per-document failures never abort the run; only the root itself is fatal

pub mod lines;

use crate::config::WardenConfig;
use crate::discover::DocFinder;
use crate::domain::issues::{Issue, ScanReport, WardenError, WardenResult};
use crate::scanner::lines::LineChecker;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Policy for documents that cannot be decoded as UTF-8 text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Record the document as skipped, warn, and continue
    #[default]
    Skip,
    /// Abort the run on the first undecodable document
    Fail,
}

/// Options for customizing scan behavior
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// How to treat documents that are not valid UTF-8
    pub decode_policy: DecodePolicy,
    /// Maximum number of documents to scan
    pub max_files: Option<usize>,
}

/// Drives discovery, per-document scanning, and accumulation into a report
pub struct Scanner {
    finder: DocFinder,
    checker: LineChecker,
}

impl Scanner {
    /// Create a scanner from discovery configuration
    pub fn new(config: &WardenConfig) -> WardenResult<Self> {
        Ok(Self { finder: DocFinder::from_config(config)?, checker: LineChecker::new()? })
    }

    /// Create a scanner with the default configuration
    pub fn with_defaults() -> WardenResult<Self> {
        Self::new(&WardenConfig::default())
    }

    /// Scan a single document from disk and return its issues.
    ///
    /// Decode failures are always errors here; policy handling belongs to the
    /// tree scan, where skips can be recorded in the report.
    pub fn scan_document<P: AsRef<Path>>(&self, file: P) -> WardenResult<Vec<Issue>> {
        let file = file.as_ref();

        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(WardenError::decode(file, "not valid UTF-8 text"));
            }
            Err(e) => return Err(WardenError::Io { source: e }),
        };

        Ok(self.checker.check(file, &content))
    }

    /// Scan all documents under a root directory and produce a report.
    ///
    /// Documents are processed one at a time in discovery (sorted) order.
    /// Issue paths in the report are relative to the root.
    pub fn scan_root<P: AsRef<Path>>(
        &self,
        root: P,
        options: &ScanOptions,
    ) -> WardenResult<ScanReport> {
        let root = root.as_ref();
        let start_time = Instant::now();
        let mut report = ScanReport::new();

        let mut documents = self.finder.find_documents(root)?;

        if let Some(max_files) = options.max_files {
            documents.truncate(max_files);
        }

        for document in &documents {
            let relative = document.strip_prefix(root).unwrap_or(document);

            match fs::read_to_string(document) {
                Ok(content) => {
                    for issue in self.checker.check(relative, &content) {
                        report.add_issue(issue);
                    }
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => match options.decode_policy {
                    DecodePolicy::Skip => {
                        tracing::warn!("Skipping {}: not valid UTF-8 text", document.display());
                        report.add_skipped(relative, "not valid UTF-8 text");
                    }
                    DecodePolicy::Fail => {
                        return Err(WardenError::decode(relative, "not valid UTF-8 text"));
                    }
                },
                Err(e) => {
                    // Isolation boundary is the document: read failures are
                    // surfaced in the report, never fatal to the run
                    tracing::warn!("Failed to read {}: {}", document.display(), e);
                    report.add_skipped(relative, e.to_string());
                }
            }
        }

        report.set_files_scanned(documents.len());
        report.set_execution_time(start_time.elapsed().as_millis() as u64);
        report.finalize();

        Ok(report)
    }
}
