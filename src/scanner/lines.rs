//! Per-line forbidden-pattern check
//!
//! Architecture: Domain Service - LineChecker is a pure function of document text
//! - No I/O and no state carried across lines; deterministic for a given input
//! - Decoding is the caller's concern; this module only ever sees valid text

use crate::domain::issues::{Issue, WardenError, WardenResult};
use regex::Regex;
use std::path::Path;

/// Box-drawing characters that don't render as tables in browsers
const BOX_DRAWING_CLASS: &str = "[╔╗╚╝║╠╣╦╩╬═]";

/// Remediation message attached to every detected line
pub const BOX_DRAWING_MESSAGE: &str =
    "Box-drawing characters detected (use list-table or code-block instead)";

/// Tests each document line against the fixed forbidden-character pattern
#[derive(Debug)]
pub struct LineChecker {
    pattern: Regex,
}

impl LineChecker {
    /// Create a checker with the forbidden-pattern set compiled
    pub fn new() -> WardenResult<Self> {
        let pattern = Regex::new(BOX_DRAWING_CLASS)
            .map_err(|e| WardenError::pattern(format!("Invalid box-drawing pattern: {e}")))?;

        Ok(Self { pattern })
    }

    /// Scan a document's full text and return one issue per offending line.
    ///
    /// Line numbers are 1-based and strictly increasing. An empty document
    /// yields an empty sequence.
    pub fn check(&self, doc: &Path, content: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if self.pattern.is_match(line) {
                issues.push(Issue::new(doc, (index + 1) as u32, BOX_DRAWING_MESSAGE));
            }
        }

        issues
    }
}
