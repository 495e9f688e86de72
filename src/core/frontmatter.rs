//! Front matter extraction and removal
//!
//! Extraction decodes the leading `---` block as YAML. Removal only looks at
//! the delimiters, so it strips blocks whose YAML would not decode.

use crate::error::{Result, TitleMatchError};
use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const DELIMITER: &str = "---";

/// Leading front matter block, delimiter to delimiter, with an optional line
/// break after the closing `---`. Either line ending is accepted at each break.
static FRONT_MATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n.*?\r?\n---(?:\r?\n)?").expect("front matter pattern is valid")
});

/// Decoded front matter: string keys mapped to arbitrary YAML values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    /// Create empty front matter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create front matter holding only a `title`
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut front_matter = Self::new();
        front_matter.insert("title", Value::String(title.into()));
        front_matter
    }

    /// Decode YAML text into front matter.
    ///
    /// An empty document (YAML null) yields empty front matter.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_yaml(value)
    }

    /// Build front matter from an already decoded YAML value
    pub fn from_yaml(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(map) => {
                let mut fields = BTreeMap::new();
                for (key, value) in map {
                    match key {
                        Value::String(key) => {
                            fields.insert(key, value);
                        }
                        other => {
                            return Err(TitleMatchError::front_matter_shape(format!(
                                "non-string key found: {:?}",
                                other
                            )));
                        }
                    }
                }
                Ok(Self { fields })
            }
            other => Err(TitleMatchError::front_matter_shape(format!(
                "expected mapping or null, found {}",
                describe(&other)
            ))),
        }
    }

    /// The declared title, if present and a YAML string
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// The `title` as written, for messages.
    ///
    /// Strings, numbers and booleans are rendered; a missing, null or
    /// structured title gives `None`. Only [`Frontmatter::title`] takes part
    /// in comparisons.
    pub fn title_text(&self) -> Option<String> {
        match self.fields.get("title")? {
            Value::String(title) => Some(title.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Look up any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Insert a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<BTreeMap<String, Value>> for Frontmatter {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Line ending used by a front matter block, taken from its opening delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    fn of_opening(content: &str) -> Option<Self> {
        let rest = content.strip_prefix(DELIMITER)?;
        if rest.starts_with('\n') {
            Some(Self::Lf)
        } else if rest.starts_with("\r\n") {
            Some(Self::Crlf)
        } else {
            None
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Rewrite `inner` with LF line endings, or `None` if it mixes styles.
    fn normalize(self, inner: &str) -> Option<String> {
        match self {
            Self::Lf => {
                if inner.contains("\r\n") || inner.ends_with('\r') {
                    None
                } else {
                    Some(inner.to_string())
                }
            }
            Self::Crlf => {
                let normalized = inner.replace("\r\n", "\n");
                let bare_lf = normalized.matches('\n').count() - inner.matches("\r\n").count();
                if bare_lf == 0 {
                    Some(normalized)
                } else {
                    None
                }
            }
        }
    }
}

/// Locate the YAML text of the leading block, normalized to LF.
fn front_matter_text(content: &str) -> Option<String> {
    let ending = LineEnding::of_opening(content)?;
    let newline = ending.as_str();
    let rest = &content[DELIMITER.len() + newline.len()..];
    let closing = format!("{newline}{DELIMITER}");
    let end = rest.find(&closing)?;
    ending.normalize(&rest[..end])
}

/// Parse the front matter block at the start of `content`.
///
/// Returns `Ok(None)` when there is no block. YAML decoding failures are
/// returned as errors rather than treated as a missing block. A block that
/// mixes LF and CRLF line endings is not recognized.
pub fn extract_frontmatter(content: &str) -> Result<Option<Frontmatter>> {
    match front_matter_text(content) {
        Some(yaml) => Frontmatter::parse(&yaml).map(Some),
        None => Ok(None),
    }
}

/// Strip the front matter block from the start of `content`.
///
/// Only the delimiters are matched; the block is never decoded. Content
/// without a block is returned unchanged.
pub fn remove_frontmatter(content: &str) -> &str {
    match FRONT_MATTER_BLOCK.find(content) {
        Some(block) => &content[block.end()..],
        None => content,
    }
}

/// Parse and strip the front matter in one call.
pub fn split_frontmatter(content: &str) -> Result<(Option<Frontmatter>, &str)> {
    let front_matter = extract_frontmatter(content)?;
    Ok((front_matter, remove_frontmatter(content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_lf() {
        let content = "---\ntitle: Getting Started\ntags: [a, b]\n---\n# Getting Started\n";
        let fm = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("Getting Started"));
        assert_eq!(fm.len(), 2);
        assert!(fm.get("tags").unwrap().is_sequence());
    }

    #[test]
    fn test_extract_crlf() {
        let content = "---\r\ntitle: Windows\r\nauthor: someone\r\n---\r\nBody\r\n";
        let fm = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("Windows"));
        assert_eq!(fm.get("author").and_then(Value::as_str), Some("someone"));
    }

    #[test]
    fn test_extract_quoted_title_crlf() {
        let content = "---\r\ntitle: \"Setup: Part 1\"\r\norder: 3\r\n---\r\n";
        let fm = extract_frontmatter(content).unwrap().unwrap();
        assert_eq!(fm.title(), Some("Setup: Part 1"));
        assert_eq!(fm.get("order").and_then(Value::as_u64), Some(3));
    }

    #[test]
    fn test_extract_without_block() {
        assert!(extract_frontmatter("# Title\n\nText").unwrap().is_none());
        assert!(extract_frontmatter("").unwrap().is_none());
        assert!(extract_frontmatter("\n---\ntitle: x\n---\n").unwrap().is_none());
        assert!(extract_frontmatter("---\ntitle: unterminated\n").unwrap().is_none());
    }

    #[test]
    fn test_extract_mixed_line_endings_is_no_match() {
        assert!(extract_frontmatter("---\ntitle: a\r\nother: b\n---\n")
            .unwrap()
            .is_none());
        assert!(extract_frontmatter("---\r\ntitle: a\nother: b\r\n---\r\n")
            .unwrap()
            .is_none());
        assert!(extract_frontmatter("---\ntitle: a\r\n---\n").unwrap().is_none());
    }

    #[test]
    fn test_extract_empty_block() {
        let fm = extract_frontmatter("---\n\n---\nBody").unwrap().unwrap();
        assert!(fm.is_empty());
        assert_eq!(fm.title(), None);
    }

    #[test]
    fn test_extract_invalid_yaml_propagates() {
        let result = extract_frontmatter("---\ntitle: [unclosed\n---\nBody");
        assert!(matches!(result, Err(TitleMatchError::Yaml(_))));
    }

    #[test]
    fn test_extract_non_mapping_is_error() {
        let result = extract_frontmatter("---\n- a\n- b\n---\n");
        assert!(matches!(
            result,
            Err(TitleMatchError::FrontMatterShape { .. })
        ));

        let result = extract_frontmatter("---\n1: one\n---\n");
        assert!(matches!(
            result,
            Err(TitleMatchError::FrontMatterShape { .. })
        ));
    }

    #[test]
    fn test_title_must_be_string() {
        let fm = Frontmatter::parse("title: 42").unwrap();
        assert!(fm.contains_key("title"));
        assert_eq!(fm.title(), None);

        let fm = Frontmatter::parse("description: no title here").unwrap();
        assert_eq!(fm.title(), None);
    }

    #[test]
    fn test_title_text_renders_scalars() {
        assert_eq!(
            Frontmatter::parse("title: 2024").unwrap().title_text(),
            Some("2024".to_string())
        );
        assert_eq!(
            Frontmatter::parse("title: true").unwrap().title_text(),
            Some("true".to_string())
        );
        assert_eq!(
            Frontmatter::with_title("Guide").title_text(),
            Some("Guide".to_string())
        );
        assert_eq!(Frontmatter::parse("title: [a, b]").unwrap().title_text(), None);
        assert_eq!(Frontmatter::parse("title:").unwrap().title_text(), None);
        assert_eq!(Frontmatter::new().title_text(), None);
    }

    #[test]
    fn test_remove_frontmatter() {
        let content = "---\ntitle: Guide\n---\n# Guide\n\nText.";
        assert_eq!(remove_frontmatter(content), "# Guide\n\nText.");

        let crlf = "---\r\ntitle: Guide\r\n---\r\n# Guide\r\n";
        assert_eq!(remove_frontmatter(crlf), "# Guide\r\n");

        let no_trailing_newline = "---\ntitle: Guide\n---";
        assert_eq!(remove_frontmatter(no_trailing_newline), "");
    }

    #[test]
    fn test_remove_keeps_content_without_block() {
        let content = "# Guide\n\n---\n\nMore";
        assert_eq!(remove_frontmatter(content), content);
        assert_eq!(remove_frontmatter(""), "");
    }

    #[test]
    fn test_remove_does_not_parse_yaml() {
        let content = "---\ntitle: [unclosed\n: : :\n---\nBody";
        assert!(extract_frontmatter(content).is_err());
        assert_eq!(remove_frontmatter(content), "Body");
    }

    #[test]
    fn test_remove_only_strips_one_newline() {
        let content = "---\ntitle: Guide\n---\n\n\nBody";
        assert_eq!(remove_frontmatter(content), "\n\nBody");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let documents = [
            "---\ntitle: Guide\n---\n# Guide\n\nText.",
            "---\r\ntitle: Guide\r\n---\r\nBody",
            "# No front matter\n",
            "---\ntitle: a\n---\n\n---\n\nbody after a rule",
            "",
        ];
        for content in documents {
            let once = remove_frontmatter(content);
            assert_eq!(remove_frontmatter(once), once, "input: {content:?}");
        }
    }

    #[test]
    fn test_split_frontmatter() {
        let (fm, body) = split_frontmatter("---\ntitle: Guide\n---\nBody").unwrap();
        assert_eq!(fm.unwrap().title(), Some("Guide"));
        assert_eq!(body, "Body");

        let (fm, body) = split_frontmatter("Body only").unwrap();
        assert!(fm.is_none());
        assert_eq!(body, "Body only");
    }

    #[test]
    fn test_with_title() {
        let fm = Frontmatter::with_title("Guide");
        assert_eq!(fm.title(), Some("Guide"));
        assert_eq!(fm.len(), 1);
    }
}
