//! Command-line argument definitions and parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use titlematch::{FinderConfig, ResolverConfig};

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "titlematch",
    version,
    about = "Check that each markdown page's H1 matches its front matter title",
    long_about = "titlematch reads markdown files, parses their YAML front matter and \
                  reports every page whose single top-level heading differs from the \
                  declared `title`, or which has more than one top-level heading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report failures: hide passing files and informational logs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check H1 headings against front matter titles
    Check(CheckArgs),
    /// List the top-level headings found in each file
    Headings(HeadingsArgs),
}

/// Common options for file operations
#[derive(Args, Debug, Clone)]
pub struct CommonFileOptions {
    /// Files or directories to process
    #[arg(default_value = ".")]
    pub files: Vec<PathBuf>,

    /// Follow symbolic links when processing directories
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth for directory recursion
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Include hidden files and directories (starting with .)
    #[arg(long)]
    pub include_hidden: bool,

    /// Only process files with these extensions
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl CommonFileOptions {
    pub fn resolver_config(&self) -> ResolverConfig {
        let defaults = ResolverConfig::default();
        ResolverConfig {
            follow_links: self.follow_links,
            max_depth: self.max_depth,
            include_hidden: self.include_hidden,
            include_extensions: if self.extensions.is_empty() {
                defaults.include_extensions
            } else {
                self.extensions.clone()
            },
        }
    }
}

/// Options controlling heading discovery
#[derive(Args, Debug, Clone)]
pub struct HeadingOptions {
    /// Also count H1 headings nested inside blockquotes
    #[arg(long)]
    pub include_blockquotes: bool,

    /// Ignore <h1> elements written as raw HTML
    #[arg(long)]
    pub no_html_headings: bool,
}

impl HeadingOptions {
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            include_html_headings: !self.no_html_headings,
            include_blockquotes: self.include_blockquotes,
        }
    }
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub files: CommonFileOptions,

    #[command(flatten)]
    pub headings: HeadingOptions,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format for validation results
    #[arg(long, value_enum, default_value = "human")]
    pub format: ReportFormat,
}

/// Arguments for the headings command
#[derive(Args, Debug)]
pub struct HeadingsArgs {
    #[command(flatten)]
    pub files: CommonFileOptions,

    #[command(flatten)]
    pub headings: HeadingOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: ReportFormat,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// Simple format (just the paths of failing files)
    Simple,
}
