//! File resolution and per-file checking

pub mod checker;
pub mod resolver;

pub use checker::{CheckerConfig, DocumentChecker, FileReport};
pub use resolver::{resolve_markdown_files, FileResolver, ResolverConfig};
