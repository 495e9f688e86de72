//! Integration tests for the titlematch library
//!
//! These tests exercise the public API the way a documentation pipeline would:
//! parse front matter, validate content, and check whole directories.

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use titlematch::*;

fn check(content: &str) -> ValidationResult {
    let front_matter = extract_frontmatter(content).unwrap().unwrap_or_default();
    validate(content, &front_matter, "docs/page.md")
}

#[test]
fn test_heading_matches_title() {
    let result = validate(
        "# Getting Started\n\nText.",
        &Frontmatter::with_title("Getting Started"),
        "docs/start.md",
    );

    assert!(result.is_valid());
    assert_eq!(result.h1s(), ["Getting Started"]);
}

#[test]
fn test_heading_differs_from_title() {
    let result = validate(
        "# Intro\n\nText.",
        &Frontmatter::with_title("Guide"),
        "docs/guide.md",
    );

    assert!(!result.is_valid());
    let error = result.error().unwrap();
    assert!(error.contains("Intro"));
    assert!(error.contains("Guide"));
    assert!(error.contains("docs/guide.md"));
}

#[test]
fn test_two_headings() {
    let result = validate(
        "# One\n\n# Two",
        &Frontmatter::with_title("Guide"),
        "docs/guide.md",
    );

    assert!(!result.is_valid());
    assert!(result.error().unwrap().contains("number of H1 tags found: 2"));
}

#[test]
fn test_no_heading() {
    let result = validate(
        "Plain paragraph.\n\n## Only a subsection\n",
        &Frontmatter::with_title("Guide"),
        "docs/guide.md",
    );

    assert!(result.is_valid());
    assert!(result.h1s().is_empty());
}

#[test]
fn test_fenced_heading_only() {
    let result = validate(
        "```\n# fake heading\n```\n",
        &Frontmatter::with_title("Guide"),
        "docs/guide.md",
    );

    assert!(result.is_valid());
    assert!(result.h1s().is_empty());
}

#[test]
fn test_full_documents() {
    let markup_title = "---\ntitle: Install *the* CLI\n---\n# Install *the* CLI\n";
    // The heading renders as "Install the CLI", the title is compared verbatim.
    assert!(!check(markup_title).is_valid());

    let plain = "---\ntitle: Install the CLI\n---\n\n# Install *the* CLI\n\nRun `cargo install`.\n";
    assert!(check(plain).is_valid());

    let crlf = "---\r\ntitle: Windows Setup\r\n---\r\n# Windows Setup\r\n\r\nText\r\n";
    assert!(check(crlf).is_valid());

    let no_front_matter = "# Orphan\n";
    let result = check(no_front_matter);
    assert!(!result.is_valid());
    assert_eq!(result.expected_title(), None);
}

#[test]
fn test_removal_is_idempotent_on_documents() {
    let documents = [
        "---\ntitle: A\n---\n# A\n",
        "---\r\ntitle: B\r\n---\r\n\r\n# B\r\n",
        "no front matter",
        "---\nbroken: [\n---\nbody",
    ];

    for content in documents {
        let once = remove_frontmatter(content);
        assert_eq!(remove_frontmatter(once), once);
    }
}

#[test]
fn test_check_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("good.md"),
        "---\ntitle: Good\n---\n# Good\n\nBody\n",
    )
    .unwrap();
    fs::write(
        root.join("bad.md"),
        "---\ntitle: Expected\n---\n# Actual\n",
    )
    .unwrap();
    fs::write(root.join("many.md"), "---\ntitle: A\n---\n# A\n\n# B\n\n# C\n").unwrap();
    fs::write(root.join("none.md"), "---\ntitle: None\n---\nJust text\n").unwrap();
    fs::write(root.join("notes.txt"), "# Not markdown\n").unwrap();

    let files = resolve_markdown_files(&[root]).unwrap();
    assert_eq!(files.len(), 4);

    let checker = DocumentChecker::new();
    let mut verdicts: Vec<(String, bool)> = files
        .iter()
        .map(|file| {
            let report = checker.check_file(file).unwrap();
            let name = file.file_name().unwrap().to_string_lossy().to_string();
            (name, report.is_valid())
        })
        .collect();
    verdicts.sort();

    assert_eq!(
        verdicts,
        vec![
            ("bad.md".to_string(), false),
            ("good.md".to_string(), true),
            ("many.md".to_string(), false),
            ("none.md".to_string(), true),
        ]
    );

    let many = checker.check_file(root.join("many.md")).unwrap();
    assert_eq!(many.result.h1s(), ["A", "B", "C"]);
    assert!(many.result.error().unwrap().contains(": 3 in "));
}

#[test]
fn test_report_serialization() {
    let report = DocumentChecker::new()
        .check_content("---\ntitle: Guide\n---\n# Guide\n", "guide.md")
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "path": "guide.md",
            "valid": true,
            "h1s": ["Guide"],
            "expectedTitle": "Guide"
        })
    );
}
