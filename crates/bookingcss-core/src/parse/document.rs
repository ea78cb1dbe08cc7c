//! One-pass tokenization of an input stylesheet.
//!
//! The importer never matches patterns against raw text more than once.
//! [`Document::parse`] runs `cssparser` over the input and keeps what the
//! extractors need: selectors with their raw bodies and declarations,
//! `@import` URLs, `@font-face` blocks, `@media` children, and every comment
//! with its byte range. Offsets index into the (line-ending normalized)
//! source, so a rule can be paired with the comment right above it.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::selectors::{collapse_whitespace, selector_key};

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*(.*?)\*/").expect("valid regex"));
static IMPORTANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*!\s*important\s*$").expect("valid regex"));

/// A tokenized stylesheet.
#[derive(Debug)]
pub(crate) struct Document {
    pub source: String,
    pub items: Vec<Item>,
    pub comments: Vec<Comment>,
}

/// A top-level construct.
#[derive(Debug)]
pub(crate) enum Item {
    Style(StyleRule),
    Import { url: String },
    FontFace { declarations: Declarations },
    Media { query: String, rules: Vec<StyleRule> },
    Other,
}

#[derive(Debug, Clone)]
pub(crate) struct StyleRule {
    /// Selector text with comments removed and whitespace collapsed.
    pub selector: String,
    /// Comparison key, see [`selector_key`].
    pub key: String,
    /// Raw text between the braces, trimmed.
    pub body: String,
    pub declarations: Declarations,
    /// Byte offset of the first selector character.
    pub start: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Comment {
    /// Text between the delimiters, trimmed.
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub name: String,
    /// Value text without `!important`.
    pub value: String,
}

/// Declarations of one block in source order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Declarations(Vec<Declaration>);

impl Declarations {
    pub fn parse(body: &str) -> Self {
        let mut input = ParserInput::new(body);
        let mut parser = Parser::new(&mut input);
        let mut decl_parser = BlockDeclarationParser;
        let entries = RuleBodyParser::new(&mut parser, &mut decl_parser)
            .flatten()
            .collect();
        Declarations(entries)
    }

    /// Value of the last declaration of `name`, like the cascade would pick.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|decl| decl.name == name)
            .map(|decl| decl.value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn extend(&mut self, other: &Declarations) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let mut top = TopLevelParser;
        let items = StyleSheetParser::new(&mut parser, &mut top)
            .filter_map(Result::ok)
            .collect();

        let comments = COMMENT
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Comment {
                    text: caps.get(1)?.as_str().trim().to_string(),
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect();

        Document {
            source: source.to_string(),
            items,
            comments,
        }
    }

    /// Top-level style rules.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.items.iter().filter_map(|item| match item {
            Item::Style(rule) => Some(rule),
            _ => None,
        })
    }

    /// Style rules nested in media blocks whose query matches `query`.
    pub fn media_rules<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a StyleRule> + 'a {
        let wanted = media_key(query);
        self.items
            .iter()
            .filter_map(move |item| match item {
                Item::Media { query: q, rules } if media_key(q) == wanted => Some(rules),
                _ => None,
            })
            .flatten()
    }

    /// The closest comment ending before `offset`, provided it ends within
    /// `max_distance` bytes and no block closes in between.
    pub fn comment_before(&self, offset: usize, max_distance: usize) -> Option<&Comment> {
        let comment = self
            .comments
            .iter()
            .take_while(|comment| comment.end <= offset)
            .last()?;
        let gap = self.source.get(comment.end..offset)?;
        (gap.len() <= max_distance && !gap.contains('}')).then_some(comment)
    }
}

/// Whitespace-free lowercase form of a media query.
fn media_key(query: &str) -> String {
    query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Consumes the rest of `input` and returns the text it covered.
fn rest_of<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    input.slice_from(start)
}

impl StyleRule {
    fn new(selector: &str, body: &str, start: usize) -> Self {
        let selector = collapse_whitespace(&COMMENT.replace_all(selector, " "));
        StyleRule {
            key: selector_key(&selector),
            selector,
            body: body.trim().to_string(),
            declarations: Declarations::parse(body),
            start,
        }
    }
}

struct TopLevelParser;

enum AtPrelude {
    Import(Option<String>),
    FontFace,
    Media(String),
    Other,
}

impl<'i> QualifiedRuleParser<'i> for TopLevelParser {
    type Prelude = (String, usize);
    type QualifiedRule = Item;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position().byte_index();
        Ok((rest_of(input).to_string(), start))
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let (selector, start) = prelude;
        Ok(Item::Style(StyleRule::new(&selector, rest_of(input), start)))
    }
}

impl<'i> AtRuleParser<'i> for TopLevelParser {
    type Prelude = AtPrelude;
    type AtRule = Item;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let prelude = match name.to_ascii_lowercase().as_str() {
            "import" => AtPrelude::Import(import_url(input)),
            "font-face" => AtPrelude::FontFace,
            "media" => AtPrelude::Media(rest_of(input).trim().to_string()),
            _ => AtPrelude::Other,
        };
        rest_of(input);
        Ok(prelude)
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        match prelude {
            AtPrelude::Import(Some(url)) => Ok(Item::Import { url }),
            _ => Ok(Item::Other),
        }
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let item = match prelude {
            AtPrelude::FontFace => Item::FontFace {
                declarations: Declarations::parse(rest_of(input)),
            },
            AtPrelude::Media(query) => {
                let rules = StyleSheetParser::new(input, self)
                    .filter_map(|item| match item {
                        Ok(Item::Style(rule)) => Some(rule),
                        _ => None,
                    })
                    .collect();
                Item::Media { query, rules }
            }
            AtPrelude::Import(_) | AtPrelude::Other => {
                rest_of(input);
                Item::Other
            }
        };
        Ok(item)
    }
}

/// First URL of an `@import` prelude: `url(...)`, `url("...")` or a bare
/// string.
fn import_url<'i>(input: &mut Parser<'i, '_>) -> Option<String> {
    loop {
        let token = input.next().cloned().ok()?;
        match token {
            Token::UnquotedUrl(url) | Token::QuotedString(url) => return Some(url.to_string()),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                return input
                    .parse_nested_block(|nested| -> Result<String, ParseError<'i, ()>> {
                        Ok(nested.expect_string()?.to_string())
                    })
                    .ok();
            }
            _ => {}
        }
    }
}

struct BlockDeclarationParser;

impl<'i> DeclarationParser<'i> for BlockDeclarationParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let name = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        Ok(Declaration {
            name,
            value: strip_important(rest_of(input)),
        })
    }
}

impl<'i> AtRuleParser<'i> for BlockDeclarationParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for BlockDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for BlockDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Drops comments and a trailing `!important` from a declaration value.
pub(crate) fn strip_important(raw: &str) -> String {
    let without_comments = COMMENT.replace_all(raw, " ");
    let value = IMPORTANT.replace(without_comments.trim(), "");
    collapse_whitespace(&value)
}
