//! Lightweight, deterministic code styling with a per-slide cache. This is
//! deliberately not a real syntax engine; it classifies comments, string
//! literals, numbers and a small keyword set per language, which is plenty
//! for slide-sized samples. Rebuilding a slide's entry is idempotent:
//! the same source always produces the same styled lines.

use std::collections::HashMap;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::deck::{SlideBlock, SlideRecord};

const COMMENT: Color = Color::Rgb(0x6c, 0x70, 0x86);
const KEYWORD: Color = Color::Rgb(0xcb, 0xa6, 0xf7);
const STRING: Color = Color::Rgb(0xa6, 0xe3, 0xa1);
const NUMBER: Color = Color::Rgb(0xfa, 0xb3, 0x87);
const PLAIN: Color = Color::Rgb(0xcd, 0xd6, 0xf4);

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "if", "else", "match", "return", "pub", "struct", "enum", "impl", "for",
    "while", "loop", "use", "mod", "trait", "self", "Self", "true", "false", "async", "await",
    "move", "vec",
];

const JS_KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "if", "else", "return", "async", "await", "new", "null",
    "true", "false", "export", "import",
];

pub struct Highlighter {
    cache: HashMap<u32, Vec<Vec<Line<'static>>>>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Rebuilds the cache entry for `slide` from its code blocks, in block
    /// order. Safe to call redundantly.
    pub fn refresh(&mut self, slide: &SlideRecord) {
        let blocks: Vec<Vec<Line<'static>>> = slide
            .blocks
            .iter()
            .filter_map(|block| match block {
                SlideBlock::Code { lang, source } => Some(highlight_source(lang, source)),
                _ => None,
            })
            .collect();
        self.cache.insert(slide.id, blocks);
    }

    /// Styled lines for the nth code block of a slide, if cached.
    pub fn block(&self, slide_id: u32, code_index: usize) -> Option<&[Line<'static>]> {
        self.cache
            .get(&slide_id)
            .and_then(|blocks| blocks.get(code_index))
            .map(Vec::as_slice)
    }
}

fn keywords_for(lang: &str) -> &'static [&'static str] {
    match lang {
        "rust" => RUST_KEYWORDS,
        "js" | "jsx" | "javascript" => JS_KEYWORDS,
        _ => &[],
    }
}

pub fn highlight_source(lang: &str, source: &str) -> Vec<Line<'static>> {
    let keywords = keywords_for(lang);
    source
        .lines()
        .map(|line| highlight_line(line, keywords))
        .collect()
}

fn highlight_line(line: &str, keywords: &[&str]) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") || trimmed.starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(COMMENT),
        ));
    }

    // Inline trailing comment: style the tail separately.
    if let Some(pos) = find_comment_start(line) {
        let (code, comment) = line.split_at(pos);
        let mut spans = tokenize(code, keywords);
        spans.push(Span::styled(
            comment.to_string(),
            Style::default().fg(COMMENT),
        ));
        return Line::from(spans);
    }

    Line::from(tokenize(line, keywords))
}

/// Position of a `//` that is not inside a string literal.
fn find_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => in_string = !in_string,
            b'/' if !in_string && i + 1 < bytes.len() && bytes[i + 1] == b'/' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

fn tokenize(code: &str, keywords: &[&str]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = code;

    while !rest.is_empty() {
        // String literal.
        if rest.starts_with('"') {
            let end = rest[1..]
                .find('"')
                .map(|i| i + 2)
                .unwrap_or(rest.len());
            spans.push(Span::styled(
                rest[..end].to_string(),
                Style::default().fg(STRING),
            ));
            rest = &rest[end..];
            continue;
        }

        // Word (identifier or number).
        if rest
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..end];
            let color = if keywords.contains(&word) {
                KEYWORD
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                NUMBER
            } else {
                PLAIN
            };
            spans.push(Span::styled(word.to_string(), Style::default().fg(color)));
            rest = &rest[end..];
            continue;
        }

        // Punctuation run up to the next word or string.
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric() || *c == '_' || *c == '"')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let end = end.max(1);
        spans.push(Span::styled(
            rest[..end].to_string(),
            Style::default().fg(PLAIN),
        ));
        rest = &rest[end..];
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_deck;

    #[test]
    fn refresh_is_idempotent() {
        let deck = builtin_deck();
        let slide = deck
            .slides()
            .iter()
            .find(|s| s.blocks.iter().any(|b| matches!(b, SlideBlock::Code { .. })))
            .unwrap();

        let mut highlighter = Highlighter::new();
        highlighter.refresh(slide);
        let first: Vec<Line> = highlighter.block(slide.id, 0).unwrap().to_vec();

        highlighter.refresh(slide);
        let second = highlighter.block(slide.id, 0).unwrap();
        assert_eq!(first.as_slice(), second);
    }

    #[test]
    fn keywords_and_strings_get_distinct_styles() {
        let lines = highlight_source("rust", "let x = \"hello\"; // greet");
        let spans = &lines[0].spans;
        let of = |needle: &str| {
            spans
                .iter()
                .find(|s| s.content.contains(needle))
                .unwrap()
                .style
                .fg
                .unwrap()
        };
        assert_eq!(of("let"), KEYWORD);
        assert_eq!(of("hello"), STRING);
        assert_eq!(of("// greet"), COMMENT);
        assert_ne!(of("let"), of("x"));
    }

    #[test]
    fn full_line_comments_are_styled_whole() {
        let lines = highlight_source("rust", "    // only a comment");
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(COMMENT));
    }

    #[test]
    fn unknown_language_still_styles_strings_and_numbers() {
        let lines = highlight_source("text", "count = 42");
        let num = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "42")
            .unwrap();
        assert_eq!(num.style.fg, Some(NUMBER));
    }
}
