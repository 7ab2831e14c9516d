//! Document discovery over a directory tree
//!
//! Architecture: Service Layer - DocFinder encapsulates the rules for locating documents
//! - Recursive traversal selecting files by recognized extension, with glob exclusions
//! - Output is lexicographically sorted so report order is reproducible across
//!   runs and platforms
//! - Only a missing or unreadable root is fatal; individual unreadable entries
//!   are logged and skipped

use crate::config::WardenConfig;
use crate::domain::issues::{WardenError, WardenResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Locates documents to validate under a root directory
#[derive(Debug, Clone)]
pub struct DocFinder {
    /// Recognized document extensions, lowercased
    extensions: Vec<String>,
    /// Compiled exclusion patterns
    exclude: Vec<glob::Pattern>,
}

impl DocFinder {
    /// Create a finder from discovery configuration
    pub fn from_config(config: &WardenConfig) -> WardenResult<Self> {
        let mut exclude = Vec::new();

        for pattern_str in &config.paths.exclude {
            let pattern = glob::Pattern::new(pattern_str).map_err(|e| {
                WardenError::pattern(format!("Invalid exclude pattern '{pattern_str}': {e}"))
            })?;
            exclude.push(pattern);
        }

        let extensions =
            config.paths.extensions.iter().map(|e| e.to_ascii_lowercase()).collect();

        Ok(Self { extensions, exclude })
    }

    /// Create a finder with the default configuration
    pub fn with_defaults() -> WardenResult<Self> {
        Self::from_config(&WardenConfig::default())
    }

    /// Whether a path names a recognized document
    pub fn is_document(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            }
            None => false,
        }
    }

    /// Whether a path matches any exclusion pattern
    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }

    /// Find all documents under a root directory, lexicographically sorted.
    ///
    /// A missing or non-directory root is fatal. Unreadable entries below the
    /// root are skipped with a warning.
    pub fn find_documents<P: AsRef<Path>>(&self, root: P) -> WardenResult<Vec<PathBuf>> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(WardenError::discovery(root, "root directory does not exist"));
        }
        if !root.is_dir() {
            return Err(WardenError::discovery(root, "root path is not a directory"));
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            let path = entry.path();

            if entry.file_type().is_file() && self.is_document(path) && !self.is_excluded(path) {
                documents.push(path.to_path_buf());
            }
        }

        documents.sort();
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_documents_recursively_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("zz.rst"), "").unwrap();
        fs::write(root.join("aa.rst"), "").unwrap();
        fs::write(root.join("web/xss.rst"), "").unwrap();

        let finder = DocFinder::with_defaults().unwrap();
        let documents = finder.find_documents(root).unwrap();

        assert_eq!(
            documents,
            vec![root.join("aa.rst"), root.join("web/xss.rst"), root.join("zz.rst")]
        );
    }

    #[test]
    fn test_ignores_foreign_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("notes.rst"), "").unwrap();
        fs::write(root.join("script.py"), "").unwrap();
        fs::write(root.join("Makefile"), "").unwrap();

        let finder = DocFinder::with_defaults().unwrap();
        let documents = finder.find_documents(root).unwrap();

        assert_eq!(documents, vec![root.join("notes.rst")]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("UPPER.RST"), "").unwrap();

        let finder = DocFinder::with_defaults().unwrap();
        let documents = finder.find_documents(root).unwrap();

        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_exclusion_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("keep.rst"), "").unwrap();
        fs::write(root.join("drafts/wip.rst"), "").unwrap();

        let config = ConfigBuilder::new().add_exclude("**/drafts/**").build().unwrap();
        let finder = DocFinder::from_config(&config).unwrap();
        let documents = finder.find_documents(root).unwrap();

        assert_eq!(documents, vec![root.join("keep.rst")]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let finder = DocFinder::with_defaults().unwrap();
        let result = finder.find_documents("/nonexistent/cheatsheets");

        assert!(matches!(result, Err(WardenError::Discovery { .. })));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("doc.rst");
        fs::write(&file, "").unwrap();

        let finder = DocFinder::with_defaults().unwrap();
        let result = finder.find_documents(&file);

        assert!(matches!(result, Err(WardenError::Discovery { .. })));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let finder = DocFinder::with_defaults().unwrap();
        let documents = finder.find_documents(temp_dir.path()).unwrap();

        assert!(documents.is_empty());
    }
}
