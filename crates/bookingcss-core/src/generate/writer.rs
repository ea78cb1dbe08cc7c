//! Block-level CSS writer.
//!
//! A [`CssWriter`] collects blocks (rules, media queries, raw text) and
//! joins them with one blank line. Empty rules are dropped on the way in,
//! so a caller can build a rule from optional fields without checking
//! whether any of them were set.

use std::fmt::Write as _;

const INDENT: &str = "  ";

/// A single style rule under construction.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    selector: String,
    declarations: Vec<(&'static str, String)>,
    important: bool,
}

impl Rule {
    /// A rule whose declarations all carry `!important`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
            important: true,
        }
    }

    /// A rule written without `!important` (`:root`, `@font-face`).
    pub fn plain(selector: impl Into<String>) -> Self {
        Self {
            important: false,
            ..Self::new(selector)
        }
    }

    pub fn decl(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// Adds the declaration only when `value` is set.
    pub fn opt(self, property: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.decl(property, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn write_to(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{}{} {{", indent, self.selector);
        for (property, value) in &self.declarations {
            let suffix = if self.important { " !important" } else { "" };
            let _ = writeln!(out, "{}{}{}: {}{};", indent, INDENT, property, value, suffix);
        }
        let _ = writeln!(out, "{}}}", indent);
    }
}

/// Collects the blocks of one generated section.
#[derive(Debug, Default)]
pub(crate) struct CssWriter {
    blocks: Vec<String>,
    pending_comment: Option<String>,
}

impl CssWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `/* text */` directly above the next block. A comment with no
    /// following block is never written.
    pub fn comment(&mut self, text: &str) {
        self.pending_comment = Some(format!("/* {} */\n", sanitize_comment(text)));
    }

    /// Writes a single line as its own block.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.push(format!("{}\n", text.as_ref()));
    }

    pub fn rule(&mut self, rule: Rule) {
        if rule.is_empty() {
            return;
        }
        let mut out = String::new();
        rule.write_to(&mut out, "");
        self.push(out);
    }

    /// Writes `@media <query>` around the non-empty rules.
    pub fn media(&mut self, query: &str, rules: impl IntoIterator<Item = Rule>) {
        let rules: Vec<Rule> = rules.into_iter().filter(|r| !r.is_empty()).collect();
        if rules.is_empty() {
            return;
        }
        let mut out = format!("@media {} {{\n", query);
        for (i, rule) in rules.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            rule.write_to(&mut out, INDENT);
        }
        out.push_str("}\n");
        self.push(out);
    }

    /// Writes pre-formatted CSS as one block.
    pub fn raw(&mut self, css: &str) {
        let css = css.trim_matches('\n');
        if css.trim().is_empty() {
            return;
        }
        self.push(format!("{}\n", css));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks joined by one blank line, ending with a newline.
    pub fn finish(self) -> String {
        self.blocks.join("\n")
    }

    fn push(&mut self, block: String) {
        match self.pending_comment.take() {
            Some(comment) => self.blocks.push(comment + &block),
            None => self.blocks.push(block),
        }
    }
}

fn sanitize_comment(text: &str) -> String {
    text.replace("*/", "* /").replace('\n', " ").trim().to_string()
}
