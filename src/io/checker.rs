//! Reading files and checking their title
//!
//! The checker is the file-system facing caller of the core: it reads a file,
//! parses its front matter and runs the title validator over the content.

use crate::core::{extract_frontmatter, FinderConfig, Frontmatter, TitleValidator, ValidationResult};
use crate::error::{Result, TitleMatchError};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the document checker
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<u64>,
    /// How headings are discovered
    pub finder: FinderConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
            finder: FinderConfig::default(),
        }
    }
}

/// Verdict for a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

/// Checks markdown files against their front matter title
#[derive(Debug, Clone)]
pub struct DocumentChecker {
    config: CheckerConfig,
    validator: TitleValidator,
}

impl DocumentChecker {
    /// Create a new checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a new checker with custom configuration
    pub fn with_config(config: CheckerConfig) -> Self {
        let validator = TitleValidator::with_finder_config(config.finder.clone());
        Self { config, validator }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Read and check a file
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<FileReport> {
        let path = path.as_ref();
        let content = self.read_file(path)?;
        self.check_content(&content, path)
    }

    /// Check already loaded content; `path` is used for messages only
    pub fn check_content<P: AsRef<Path>>(&self, content: &str, path: P) -> Result<FileReport> {
        let path = path.as_ref();
        let front_matter = extract_frontmatter(content)
            .map_err(|e| e.with_path(path))?
            .unwrap_or_else(|| {
                debug!("{} has no front matter", path.display());
                Frontmatter::new()
            });

        let label = path.to_string_lossy();
        let result = self.validator.validate(content, &front_matter, &label);
        debug!(
            "Checked {}: valid={} h1s={}",
            path.display(),
            result.is_valid(),
            result.h1s().len()
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            result,
        })
    }

    /// Collect the top-level headings of a file without validating them
    pub fn headings<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let content = self.read_file(path.as_ref())?;
        Ok(self.validator.finder().find(&content))
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(TitleMatchError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(TitleMatchError::not_a_file(path));
        }

        if let Some(max_size) = self.config.max_file_size {
            let metadata = fs::metadata(path)?;

            if metadata.len() > max_size {
                return Err(TitleMatchError::file_too_large(
                    path,
                    metadata.len(),
                    max_size,
                ));
            }
        }

        fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => TitleMatchError::permission_denied(path),
            _ => TitleMatchError::Io(e),
        })
    }
}

impl Default for DocumentChecker {
    fn default() -> Self {
        Self::new()
    }
}
