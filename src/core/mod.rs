//! Core title checking logic
//!
//! This module contains the parts that never touch the file system:
//! - frontmatter: Front matter extraction and removal
//! - headings: Top-level heading discovery on the rendered markdown
//! - validate: Comparison of the heading against the declared title

pub mod frontmatter;
pub mod headings;
pub mod validate;

pub use frontmatter::{extract_frontmatter, remove_frontmatter, split_frontmatter, Frontmatter};
pub use headings::{find_top_level_headings, FinderConfig, HeadingFinder};
pub use validate::{validate, TitleValidator, ValidationResult, Violation};
