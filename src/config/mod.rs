//! Configuration loading and management for RST Warden
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain objects
//! - Default configuration is embedded in the domain, not infrastructure
//! - The forbidden-pattern set is fixed by the scanner and deliberately absent here:
//!   configuration covers the discovery surface only

use crate::domain::issues::{WardenError, WardenResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for RST Warden
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardenConfig {
    /// Configuration format version
    pub version: String,
    /// Document discovery configuration
    pub paths: PathConfig,
}

/// Document discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    /// File extensions recognized as documents (without the leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to exclude from discovery
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl WardenConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WardenResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            WardenError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            WardenError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> WardenResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| WardenError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Get default configuration
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            paths: PathConfig {
                extensions: default_extensions(),
                exclude: vec![
                    // Default exclusions
                    "**/.git/**".to_string(),
                    "**/_build/**".to_string(),
                    "**/target/**".to_string(),
                ],
            },
        }
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> WardenResult<()> {
        // Check version compatibility
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(WardenError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        if self.paths.extensions.is_empty() {
            return Err(WardenError::config(
                "At least one document extension must be configured".to_string(),
            ));
        }

        for ext in &self.paths.extensions {
            if ext.starts_with('.') {
                return Err(WardenError::config(format!(
                    "Extension '{ext}' must not include a leading dot"
                )));
            }
        }

        // Validate exclusion globs can compile
        for pattern in &self.paths.exclude {
            glob::Pattern::new(pattern).map_err(|e| {
                WardenError::config(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn default_extensions() -> Vec<String> {
    vec!["rst".to_string()]
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: WardenConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: WardenConfig::default() }
    }

    /// Add a recognized document extension
    pub fn add_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.paths.extensions.push(extension.into());
        self
    }

    /// Add an exclusion glob pattern
    pub fn add_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.config.paths.exclude.push(pattern.into());
        self
    }

    /// Replace the recognized extensions entirely
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.paths.extensions = extensions;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> WardenResult<WardenConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WardenConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.paths.extensions, vec!["rst"]);
        assert!(!config.paths.exclude.is_empty());
    }

    #[test]
    fn test_load_from_str() {
        let yaml = r#"
version: "1.0"
paths:
  extensions: ["rst", "txt"]
  exclude: ["**/drafts/**"]
"#;

        let config = WardenConfig::load_from_str(yaml).unwrap();
        assert_eq!(config.paths.extensions, vec!["rst", "txt"]);
        assert_eq!(config.paths.exclude, vec!["**/drafts/**"]);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let yaml = r#"
version: "1.0"
paths: {}
"#;

        let config = WardenConfig::load_from_str(yaml).unwrap();
        assert_eq!(config.paths.extensions, vec!["rst"]);
        assert!(config.paths.exclude.is_empty());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let yaml = r#"
version: "2.0"
paths:
  extensions: ["rst"]
"#;

        let result = WardenConfig::load_from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_exclude_pattern_rejected() {
        let yaml = r#"
version: "1.0"
paths:
  extensions: ["rst"]
  exclude: ["[invalid"]
"#;

        let result = WardenConfig::load_from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let config = ConfigBuilder::new().extensions(vec![".rst".to_string()]).build();
        assert!(config.is_err());
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new()
            .add_extension("txt")
            .add_exclude("**/generated/**")
            .build()
            .unwrap();

        assert!(config.paths.extensions.contains(&"txt".to_string()));
        assert!(config.paths.exclude.contains(&"**/generated/**".to_string()));
    }
}
