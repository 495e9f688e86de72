//! Top-level heading discovery
//!
//! The body is rendered with `pulldown-cmark`, so code blocks, code spans and
//! HTML comments never produce headings. Only level-1 headings are collected,
//! flattened to their visible text.

use crate::core::frontmatter::remove_frontmatter;
use log::trace;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use scraper::{Html, Selector};

/// Configuration for the heading finder
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Also collect `<h1>` elements written as raw HTML blocks
    pub include_html_headings: bool,
    /// Also collect headings nested inside blockquotes
    pub include_blockquotes: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            include_html_headings: true,
            include_blockquotes: false,
        }
    }
}

/// Collects the text of every top-level heading in a markdown document
#[derive(Debug, Clone, Default)]
pub struct HeadingFinder {
    config: FinderConfig,
}

impl HeadingFinder {
    /// Create a new finder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new finder with custom configuration
    pub fn with_config(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Find all top-level headings, in document order.
    ///
    /// Front matter is stripped first. Headings whose visible text is empty
    /// (only an image, only whitespace) are skipped. Duplicates are kept.
    pub fn find(&self, content: &str) -> Vec<String> {
        let body = remove_frontmatter(content);
        let parser = Parser::new_ext(body, markdown_options());

        let mut headings = Vec::new();
        let mut current: Option<String> = None;
        let mut html_block = String::new();
        let mut quote_depth = 0usize;
        let mut image_depth = 0usize;

        for event in parser {
            match event {
                Event::Start(Tag::BlockQuote(_)) => quote_depth += 1,
                Event::End(TagEnd::BlockQuote(_)) => {
                    quote_depth = quote_depth.saturating_sub(1);
                }
                Event::Start(Tag::Heading {
                    level: HeadingLevel::H1,
                    ..
                }) if self.accepts(quote_depth) => {
                    current = Some(String::new());
                }
                Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                    if let Some(text) = current.take() {
                        push_heading(&mut headings, &text);
                    }
                }
                Event::Start(Tag::Image { .. }) => image_depth += 1,
                Event::End(TagEnd::Image) => {
                    image_depth = image_depth.saturating_sub(1);
                }
                Event::Text(text) | Event::Code(text) if image_depth == 0 => {
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(buf) = current.as_mut() {
                        buf.push('\n');
                    }
                }
                Event::Start(Tag::HtmlBlock) => html_block.clear(),
                Event::Html(html) => html_block.push_str(&html),
                Event::End(TagEnd::HtmlBlock) => {
                    if self.config.include_html_headings && self.accepts(quote_depth) {
                        for text in html_headings(&html_block) {
                            push_heading(&mut headings, &text);
                        }
                    }
                    html_block.clear();
                }
                _ => {}
            }
        }

        trace!("found {} top-level heading(s)", headings.len());
        headings
    }

    fn accepts(&self, quote_depth: usize) -> bool {
        quote_depth == 0 || self.config.include_blockquotes
    }
}

/// Find all top-level headings with the default configuration
pub fn find_top_level_headings(content: &str) -> Vec<String> {
    HeadingFinder::new().find(content)
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

fn push_heading(headings: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        headings.push(text.to_string());
    }
}

/// Visible text of each `<h1>` element in a raw HTML block.
///
/// The fragment goes through a real HTML parser, so comments are dropped,
/// attributes never leak into the text and entities are decoded the same way
/// they are in markdown headings.
fn html_headings(html: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1") else {
        return Vec::new();
    };

    Html::parse_fragment(html)
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}
