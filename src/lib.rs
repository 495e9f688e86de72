//! titlematch: a documentation lint for markdown titles
//!
//! Checks that a markdown page's single top-level heading matches the `title`
//! declared in its YAML front matter. Pages with no top-level heading pass;
//! pages with several fail.
//!
//! # Quick Start
//!
//! ```rust
//! use titlematch::{extract_frontmatter, validate, Result};
//!
//! fn main() -> Result<()> {
//!     let content = "---\ntitle: Getting Started\n---\n# Getting Started\n\nText.";
//!     let front_matter = extract_frontmatter(content)?.unwrap_or_default();
//!
//!     let result = validate(content, &front_matter, "docs/start.md");
//!     assert!(result.is_valid());
//!     assert_eq!(result.h1s(), ["Getting Started"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Checking Files
//!
//! ```rust,no_run
//! use titlematch::{DocumentChecker, FileResolver, Result};
//!
//! fn main() -> Result<()> {
//!     let files = FileResolver::new().resolve_paths(&["docs/"])?;
//!     let checker = DocumentChecker::new();
//!
//!     for file in files {
//!         let report = checker.check_file(&file)?;
//!         if let Some(error) = report.result.error() {
//!             eprintln!("{}", error);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): front matter handling, heading discovery and validation; no I/O
//! - [`io`]: file resolution and per-file checking
//! - [`error`]: error types for failures that prevent a verdict

// Public API exports
pub use crate::error::{Result, TitleMatchError};

// Core types
pub use crate::core::{
    extract_frontmatter, find_top_level_headings, remove_frontmatter, split_frontmatter,
    validate, FinderConfig, Frontmatter, HeadingFinder, TitleValidator, ValidationResult,
    Violation,
};

// IO types
pub use crate::io::{
    resolve_markdown_files, CheckerConfig, DocumentChecker, FileReport, FileResolver,
    ResolverConfig,
};

pub mod core;
pub mod error;
pub mod io;
