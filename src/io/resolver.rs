//! File resolution for handling multiple files and directories
//!
//! Directories are walked recursively and filtered down to markdown files.
//! Paths named explicitly are always kept, whatever their extension.

use crate::error::{Result, TitleMatchError};
use log::debug;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Configuration for file resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum recursion depth for directory traversal
    pub max_depth: Option<usize>,
    /// Include hidden files and directories (starting with .)
    pub include_hidden: bool,
    /// File extensions to collect from directories, compared case-insensitively
    pub include_extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            include_hidden: false,
            include_extensions: vec!["md".to_string(), "markdown".to_string()],
        }
    }
}

/// File resolver for handling multiple files and directories
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    config: ResolverConfig,
}

impl FileResolver {
    /// Create a new resolver with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new resolver with custom configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve paths to a sorted, deduplicated list of files
    pub fn resolve_paths<P>(&self, paths: &[P]) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
    {
        let mut resolved = BTreeSet::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_file() {
                resolved.insert(path.to_path_buf());
            } else if path.is_dir() {
                resolved.extend(self.traverse_directory(path)?);
            } else {
                return Err(TitleMatchError::file_not_found(path));
            }
        }

        debug!("Resolved {} file(s) from {} path(s)", resolved.len(), paths.len());
        Ok(resolved.into_iter().collect())
    }

    /// Traverse a directory and collect matching files
    fn traverse_directory(&self, dir_path: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir_path)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| self.config.include_hidden || !is_hidden(entry));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;

            if entry.file_type().is_file() && self.has_included_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn has_included_extension(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        self.config
            .include_extensions
            .iter()
            .any(|included| included.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }
}

/// Hidden entries below the walk root; the root itself is never hidden
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Resolve paths to markdown files with default settings
pub fn resolve_markdown_files<P>(paths: &[P]) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    FileResolver::new().resolve_paths(paths)
}
