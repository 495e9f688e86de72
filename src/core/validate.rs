//! H1 / front matter title comparison
//!
//! A document passes when it has no top-level heading, or exactly one whose
//! text equals the front matter `title`. Failing documents are reported as
//! data on [`ValidationResult`]; nothing here returns an error.

use crate::core::frontmatter::Frontmatter;
use crate::core::headings::{FinderConfig, HeadingFinder};
use log::trace;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a document failed validation.
///
/// The `Display` output is the user-facing error message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Expected 0 or 1 H1 tag, number of H1 tags found: {count} in {path}")]
    TooManyHeadings { count: usize, path: String },

    /// `expected` is the title as written; `None` when there is none.
    #[error(
        "H1 \"{heading}\" does not match frontmatter title \"{}\" in {path}",
        title_or_null(.expected)
    )]
    TitleMismatch {
        heading: String,
        expected: Option<String>,
        path: String,
    },
}

fn title_or_null(title: &Option<String>) -> &str {
    title.as_deref().unwrap_or("null")
}

/// Outcome of validating one document.
///
/// `error` is set exactly when the document is invalid; the constructors are
/// the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    h1s: Vec<String>,
    expected_title: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_violation"
    )]
    error: Option<Violation>,
}

fn serialize_violation<S>(violation: &Option<Violation>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match violation {
        Some(violation) => serializer.serialize_str(&violation.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ValidationResult {
    fn pass(h1s: Vec<String>, expected_title: Option<String>) -> Self {
        Self {
            valid: true,
            h1s,
            expected_title,
            error: None,
        }
    }

    fn fail(h1s: Vec<String>, expected_title: Option<String>, violation: Violation) -> Self {
        Self {
            valid: false,
            h1s,
            expected_title,
            error: Some(violation),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Top-level headings found, in document order
    pub fn h1s(&self) -> &[String] {
        &self.h1s
    }

    /// The front matter title the heading was compared against
    pub fn expected_title(&self) -> Option<&str> {
        self.expected_title.as_deref()
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.error.as_ref()
    }

    /// The error message, present only for invalid documents
    pub fn error(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Validates documents with a configurable heading finder
#[derive(Debug, Clone, Default)]
pub struct TitleValidator {
    finder: HeadingFinder,
}

impl TitleValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_finder_config(config: FinderConfig) -> Self {
        Self {
            finder: HeadingFinder::with_config(config),
        }
    }

    pub fn finder(&self) -> &HeadingFinder {
        &self.finder
    }

    /// Check the top-level heading of `content` against the front matter title.
    ///
    /// `file_path` only appears in error messages.
    pub fn validate(
        &self,
        content: &str,
        front_matter: &Frontmatter,
        file_path: &str,
    ) -> ValidationResult {
        let expected_title = front_matter.title().map(str::to_string);
        let h1s = self.finder.find(content);
        trace!("{}: h1s={:?} title={:?}", file_path, h1s, expected_title);

        match h1s.as_slice() {
            [] => ValidationResult::pass(h1s, expected_title),
            [heading] => {
                if expected_title.as_deref() == Some(heading.as_str()) {
                    ValidationResult::pass(h1s, expected_title)
                } else {
                    let violation = Violation::TitleMismatch {
                        heading: heading.clone(),
                        expected: front_matter.title_text(),
                        path: file_path.to_string(),
                    };
                    ValidationResult::fail(h1s, expected_title, violation)
                }
            }
            _ => {
                let violation = Violation::TooManyHeadings {
                    count: h1s.len(),
                    path: file_path.to_string(),
                };
                ValidationResult::fail(h1s, expected_title, violation)
            }
        }
    }
}

/// Validate with the default heading finder
pub fn validate(content: &str, front_matter: &Frontmatter, file_path: &str) -> ValidationResult {
    TitleValidator::new().validate(content, front_matter, file_path)
}
