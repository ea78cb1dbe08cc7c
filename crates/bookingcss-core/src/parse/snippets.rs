//! Custom snippet recovery: the labeled snippet section and the catch-all
//! for unrecognized class or id rules.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CustomSnippet;
use crate::selectors::{is_marker_comment, is_structural, SNIPPETS_FOOTER, SNIPPETS_HEADER};

use super::document::{Document, StyleRule};
use super::extract::{ExtractResult, Extraction};

/// How far back a naming comment may end before its rule.
const NAME_LOOKBACK: usize = 200;
const DEFAULT_SNIPPET_NAME: &str = "Imported rule";
/// Bodies this short or shorter are not worth keeping.
const MIN_BODY_LEN: usize = 3;

static CLASS_OR_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.#]-?[A-Za-z_]").expect("valid regex"));

/// Byte range between the section header and its end marker (or the end
/// of input when the marker is missing).
pub(crate) fn section_range(doc: &Document) -> Option<Range<usize>> {
    let start = doc.source.find(SNIPPETS_HEADER)? + SNIPPETS_HEADER.len();
    let end = doc.source[start..]
        .find(SNIPPETS_FOOTER)
        .map_or(doc.source.len(), |offset| start + offset);
    Some(start..end)
}

fn snippet_name(doc: &Document, rule: &StyleRule, floor: usize) -> String {
    doc.comment_before(rule.start, NAME_LOOKBACK)
        .filter(|comment| {
            comment.start >= floor && !comment.text.is_empty() && !is_marker_comment(&comment.text)
        })
        .map(|comment| comment.text.clone())
        .unwrap_or_else(|| DEFAULT_SNIPPET_NAME.to_string())
}

/// Body text with each line trimmed and blank lines dropped.
fn normalize_properties(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn snippet(doc: &Document, rule: &StyleRule, floor: usize) -> CustomSnippet {
    CustomSnippet::new(
        "",
        snippet_name(doc, rule, floor),
        rule.selector.clone(),
        normalize_properties(&rule.body),
    )
}

/// Every rule inside the snippet section, named by the comment above it.
pub(crate) fn extract_section(doc: &Document) -> ExtractResult {
    let Some(range) = section_range(doc) else {
        return Ok(Vec::new());
    };
    Ok(doc
        .style_rules()
        .filter(|rule| range.contains(&rule.start) && !rule.body.is_empty())
        .map(|rule| Extraction::Snippet(snippet(doc, rule, range.start)))
        .collect())
}

/// Top-level rules the structured model does not own.
///
/// A rule qualifies when its selector has a class or id, it sits outside the
/// snippet section, no structural prefix claims it, and its body is longer
/// than a few characters.
pub(crate) fn extract_catch_all(doc: &Document) -> ExtractResult {
    let section = section_range(doc);
    Ok(doc
        .style_rules()
        .filter(|rule| {
            let in_section = section
                .as_ref()
                .is_some_and(|range| range.contains(&rule.start));
            !in_section
                && CLASS_OR_ID.is_match(&rule.selector)
                && !is_structural(&rule.selector)
                && rule.body.len() > MIN_BODY_LEN
        })
        .map(|rule| Extraction::Snippet(snippet(doc, rule, 0)))
        .collect())
}
