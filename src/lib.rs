//! RST Warden - markup validation for cheatsheet documents
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain logic separated from infrastructure concerns
//! - Clean boundaries between the scan core and terminal/CLI plumbing
//! - The validator facade ties discovery, scanning, and report rendering together

pub mod config;
pub mod discover;
pub mod domain;
pub mod report;
pub mod scanner;

// Re-export main types for convenient access
pub use domain::issues::{
    Issue, ScanReport, ScanSummary, SkippedDoc, WardenError, WardenResult,
};

pub use config::{ConfigBuilder, PathConfig, WardenConfig};

pub use discover::DocFinder;

pub use report::{OutputFormat, ReportFormatter, ReportOptions};

pub use scanner::lines::{LineChecker, BOX_DRAWING_MESSAGE};
pub use scanner::{DecodePolicy, ScanOptions, Scanner};

use std::path::Path;

/// Main validator providing high-level validation operations
pub struct WardenValidator {
    scanner: Scanner,
    report_formatter: ReportFormatter,
}

impl WardenValidator {
    /// Create a new validator with the given configuration
    pub fn new_with_config(config: WardenConfig) -> WardenResult<Self> {
        let scanner = Scanner::new(&config)?;
        let report_formatter = ReportFormatter::default();

        Ok(Self { scanner, report_formatter })
    }

    /// Create a validator with default configuration
    pub fn new() -> WardenResult<Self> {
        Self::new_with_config(WardenConfig::default())
    }

    /// Create a validator loading configuration from file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> WardenResult<Self> {
        let config = WardenConfig::load_from_file(path)?;
        Self::new_with_config(config)
    }

    /// Set custom report formatter
    pub fn with_report_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.report_formatter = formatter;
        self
    }

    /// Validate an entire documentation tree
    pub fn validate_root<P: AsRef<Path>>(
        &self,
        root: P,
        options: &ScanOptions,
    ) -> WardenResult<ScanReport> {
        self.scanner.scan_root(root, options)
    }

    /// Validate a single document
    pub fn validate_file<P: AsRef<Path>>(&self, file: P) -> WardenResult<Vec<Issue>> {
        self.scanner.scan_document(file)
    }

    /// Format a scan report for output
    pub fn format_report(&self, report: &ScanReport, format: OutputFormat) -> WardenResult<String> {
        self.report_formatter.format_report(report, format)
    }
}

/// Convenience function to validate a directory with default settings
pub fn validate_directory<P: AsRef<Path>>(root: P) -> WardenResult<ScanReport> {
    let validator = WardenValidator::new()?;
    validator.validate_root(root, &ScanOptions::default())
}
