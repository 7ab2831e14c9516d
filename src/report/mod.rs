//! Report rendering with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - ScanReport (domain) is converted to various external representations
//! - Each formatter encapsulates the rules for its specific output format
//! - The scan itself never prints; everything the user sees is rendered here
//!
//! The human format deliberately contains no timestamps or durations, so two
//! runs over an unchanged tree produce byte-identical console output.

use crate::domain::issues::{Issue, ScanReport, WardenError, WardenResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Width of the horizontal rules framing the human report
const RULE_WIDTH: usize = 70;

/// Supported output formats for scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format with the pass/fail summary
    #[default]
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// GitHub Actions annotations for workflow integration
    GitHub,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "github" => Some(Self::GitHub),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json", "github"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for the human format)
    pub use_colors: bool,
    /// How many issues to show per document before eliding the rest
    pub max_issues_per_file: usize,
    /// Whether to print the fixed remediation suggestions on failure
    pub show_suggestions: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { use_colors: true, max_issues_per_file: 3, show_suggestions: true }
    }
}

/// Main report formatter that dispatches to specific formatters
pub struct ReportFormatter {
    options: ReportOptions,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a scan report in the specified format
    pub fn format_report(&self, report: &ScanReport, format: OutputFormat) -> WardenResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::GitHub => Ok(self.format_github(report)),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(
        &self,
        report: &ScanReport,
        format: OutputFormat,
        mut writer: W,
    ) -> WardenResult<()> {
        let formatted = self.format_report(report, format)?;
        writer.write_all(formatted.as_bytes()).map_err(|e| WardenError::Io { source: e })?;
        Ok(())
    }

    /// Format report in the human-readable console layout
    fn format_human(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        output.push_str("🔍 Validating RST files...\n");
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        // Group issues by document; BTreeMap keeps lexicographic path order
        let mut by_file: BTreeMap<&Path, Vec<&Issue>> = BTreeMap::new();
        for issue in &report.issues {
            by_file.entry(&issue.file).or_default().push(issue);
        }

        for (file, issues) in &by_file {
            if self.options.use_colors {
                output.push_str(&format!("\n❌ \x1b[31m{}\x1b[0m\n", file.display()));
            } else {
                output.push_str(&format!("\n❌ {}\n", file.display()));
            }

            for issue in issues.iter().take(self.options.max_issues_per_file) {
                output.push_str(&format!("   {}\n", issue.format_display()));
            }

            if issues.len() > self.options.max_issues_per_file {
                output.push_str(&format!(
                    "   ... and {} more issues\n",
                    issues.len() - self.options.max_issues_per_file
                ));
            }
        }

        for skipped in &report.skipped {
            output.push_str(&format!(
                "\n⚠️  Skipped {}: {}\n",
                skipped.file.display(),
                skipped.reason
            ));
        }

        output.push('\n');
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        if !report.has_issues() {
            if self.options.use_colors {
                output.push_str("✅ \x1b[32mAll RST files validated successfully!\x1b[0m\n");
            } else {
                output.push_str("✅ All RST files validated successfully!\n");
            }
        } else {
            let summary = format!(
                "Found {} issues in {} files",
                report.summary.total_issues, report.summary.files_with_issues
            );
            if self.options.use_colors {
                output.push_str(&format!("⚠️  \x1b[33m{summary}\x1b[0m\n"));
            } else {
                output.push_str(&format!("⚠️  {summary}\n"));
            }

            if self.options.show_suggestions {
                output.push_str("\nFix suggestions:\n");
                output.push_str("  • Replace box-drawing tables with .. list-table::\n");
                output.push_str("  • Or wrap decorative boxes in .. code-block:: text\n");
            }
        }

        output
    }

    /// Format report in JSON format
    fn format_json(&self, report: &ScanReport) -> WardenResult<String> {
        let json_issues: Vec<JsonValue> = report
            .issues
            .iter()
            .map(|issue| {
                serde_json::json!({
                    "file": issue.file.display().to_string(),
                    "line": issue.line,
                    "message": issue.message,
                })
            })
            .collect();

        let json_skipped: Vec<JsonValue> = report
            .skipped
            .iter()
            .map(|skipped| {
                serde_json::json!({
                    "file": skipped.file.display().to_string(),
                    "reason": skipped.reason,
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "issues": json_issues,
            "skipped": json_skipped,
            "summary": {
                "total_files": report.summary.total_files,
                "files_with_issues": report.summary.files_with_issues,
                "total_issues": report.summary.total_issues,
                "skipped_files": report.summary.skipped_files,
                "execution_time_ms": report.summary.execution_time_ms,
                "validated_at": report.summary.validated_at.to_rfc3339(),
            },
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| WardenError::config(format!("JSON serialization failed: {e}")))
    }

    /// Format report as GitHub Actions annotations
    fn format_github(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for issue in &report.issues {
            output.push_str(&format!(
                "::error file={},line={}::{}\n",
                issue.file.display(),
                issue.line,
                issue.message
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::lines::BOX_DRAWING_MESSAGE;

    fn plain_formatter() -> ReportFormatter {
        ReportFormatter::new(ReportOptions { use_colors: false, ..Default::default() })
    }

    fn report_with_issues(counts: &[(&str, u32)]) -> ScanReport {
        let mut report = ScanReport::new();
        for (file, lines) in counts {
            for line in 1..=*lines {
                report.add_issue(Issue::new(*file, line, BOX_DRAWING_MESSAGE));
            }
        }
        report.set_files_scanned(counts.len());
        report.finalize();
        report
    }

    #[test]
    fn test_success_output() {
        let mut report = ScanReport::new();
        report.set_files_scanned(4);
        report.finalize();

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("🔍 Validating RST files..."));
        assert!(output.contains("✅ All RST files validated successfully!"));
        assert!(!output.contains("Fix suggestions"));
    }

    #[test]
    fn test_flagged_document_block() {
        let report = report_with_issues(&[("linux.rst", 2)]);

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("❌ linux.rst"));
        assert!(output.contains(&format!("Line 1: {BOX_DRAWING_MESSAGE}")));
        assert!(output.contains(&format!("Line 2: {BOX_DRAWING_MESSAGE}")));
        assert!(output.contains("Found 2 issues in 1 files"));
        assert!(output.contains("Replace box-drawing tables with .. list-table::"));
        assert!(output.contains("Or wrap decorative boxes in .. code-block:: text"));
    }

    #[test]
    fn test_exactly_three_issues_show_no_elision() {
        let report = report_with_issues(&[("a.rst", 3)]);

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("Line 3:"));
        assert!(!output.contains("more issues"));
    }

    #[test]
    fn test_four_issues_elide_one() {
        let report = report_with_issues(&[("a.rst", 4)]);

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("Line 3:"));
        assert!(!output.contains("Line 4:"));
        assert!(output.contains("... and 1 more issues"));
        assert!(output.contains("Found 4 issues in 1 files"));
    }

    #[test]
    fn test_five_issues_elide_two_but_count_all() {
        let report = report_with_issues(&[("a.rst", 5)]);

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("... and 2 more issues"));
        assert!(output.contains("Found 5 issues in 1 files"));
    }

    #[test]
    fn test_skipped_documents_are_surfaced() {
        let mut report = ScanReport::new();
        report.add_skipped("broken.rst", "not valid UTF-8 text");
        report.set_files_scanned(1);
        report.finalize();

        let output = plain_formatter().format_report(&report, OutputFormat::Human).unwrap();

        assert!(output.contains("⚠️  Skipped broken.rst: not valid UTF-8 text"));
        // Skips alone do not fail the gate
        assert!(output.contains("✅ All RST files validated successfully!"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let report = report_with_issues(&[("a.rst", 4), ("b.rst", 1)]);
        let formatter = plain_formatter();

        let first = formatter.format_report(&report, OutputFormat::Human).unwrap();
        let second = formatter.format_report(&report, OutputFormat::Human).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_format() {
        let report = report_with_issues(&[("a.rst", 2)]);

        let output = plain_formatter().format_report(&report, OutputFormat::Json).unwrap();
        let json: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(json["issues"].as_array().unwrap().len(), 2);
        assert_eq!(json["issues"][0]["file"], "a.rst");
        assert_eq!(json["issues"][0]["line"], 1);
        assert_eq!(json["summary"]["total_issues"], 2);
        assert_eq!(json["summary"]["files_with_issues"], 1);
    }

    #[test]
    fn test_github_format() {
        let report = report_with_issues(&[("web/xss.rst", 1)]);

        let output = plain_formatter().format_report(&report, OutputFormat::GitHub).unwrap();

        assert!(output.contains("::error file=web/xss.rst,line=1::"));
        assert!(output.contains(BOX_DRAWING_MESSAGE));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("github"), Some(OutputFormat::GitHub));
        assert_eq!(OutputFormat::from_str("sarif"), None);
    }
}
