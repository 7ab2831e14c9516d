//! Core domain models for markup issues and scan results
//!
//! Architecture: Rich Domain Models - the report is an aggregate root, not just data
//! - ScanReport owns issue accumulation and keeps its summary counters consistent
//! - Issues are immutable value objects created once during a scan
//! - Rendering is left entirely to the report module so the scan stays pure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single detected violation, tied to a document and a line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Document path, relative to the scan root
    pub file: PathBuf,
    /// Line number (1-indexed) where the forbidden characters occur
    pub line: u32,
    /// Human-readable remediation message
    pub message: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(file: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self { file: file.into(), line, message: message.into() }
    }

    /// Format issue for display within a flagged-document block
    pub fn format_display(&self) -> String {
        format!("Line {}: {}", self.line, self.message)
    }
}

/// A document that could not be decoded and was skipped under the default policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDoc {
    /// Document path, relative to the scan root
    pub file: PathBuf,
    /// Why the document was skipped
    pub reason: String,
}

/// Aggregate counters produced after scanning all discovered documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of documents scanned
    pub total_files: usize,
    /// Number of distinct documents with at least one issue
    pub files_with_issues: usize,
    /// Total number of issues across all documents
    pub total_issues: usize,
    /// Number of documents skipped due to decode failures
    pub skipped_files: usize,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when validation was performed
    pub validated_at: DateTime<Utc>,
}

/// Complete result of one validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// All issues found, in document order then line order
    pub issues: Vec<Issue>,
    /// Documents skipped due to decode failures
    pub skipped: Vec<SkippedDoc>,
    /// Summary statistics
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Create a new empty scan report
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            skipped: Vec::new(),
            summary: ScanSummary { validated_at: Utc::now(), ..Default::default() },
        }
    }

    /// Add an issue to the report
    pub fn add_issue(&mut self, issue: Issue) {
        self.summary.total_issues += 1;
        self.issues.push(issue);
    }

    /// Record a document skipped because it could not be decoded
    pub fn add_skipped(&mut self, file: impl Into<PathBuf>, reason: impl Into<String>) {
        self.summary.skipped_files += 1;
        self.skipped.push(SkippedDoc { file: file.into(), reason: reason.into() });
    }

    /// Whether the report contains any issues
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Distinct flagged documents, in first-appearance order
    pub fn flagged_files(&self) -> Vec<&Path> {
        let mut files: Vec<&Path> = Vec::new();
        for issue in &self.issues {
            if files.last() != Some(&issue.file.as_path()) {
                files.push(&issue.file);
            }
        }
        files
    }

    /// Set the number of documents scanned
    pub fn set_files_scanned(&mut self, count: usize) {
        self.summary.total_files = count;
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }

    /// Sort issues by document path and line number for consistent output,
    /// then refresh the distinct flagged-document count
    pub fn finalize(&mut self) {
        self.issues.sort_by(|a, b| a.file.cmp(&b.file).then_with(|| a.line.cmp(&b.line)));
        self.summary.files_with_issues = self.flagged_files().len();
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Error types that can occur during a validation run
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    /// Root directory is missing or unreadable - fatal, no report is produced
    #[error("Discovery error at '{}': {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    /// A document could not be decoded as UTF-8 text
    #[error("Cannot decode '{}': {message}", file.display())]
    Decode { file: PathBuf, message: String },

    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A glob or regex pattern failed to compile
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WardenError {
    /// Create a discovery error for the scan root
    pub fn discovery(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Discovery { path: path.into(), message: message.into() }
    }

    /// Create a decode error for a single document
    pub fn decode(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode { file: file.into(), message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern { message: message.into() }
    }
}

/// Result type for Warden operations
pub type WardenResult<T> = Result<T, WardenError>;
