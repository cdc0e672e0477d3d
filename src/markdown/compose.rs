//! Composition: lowering the block list into the presentable tree.
//!
//! This is the pipeline entry point. Paragraph-like content (headings,
//! paragraphs, quote lines, list items) goes through the inline tokenizer;
//! code, display math, rules, and blanks render structurally. The whole
//! pass is synchronous and pure, and safe to call from a redraw loop.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{Block, Inline, ListEntry, Presentable};
use super::blocks::segment;
use super::inlines::tokenize;
use super::math;

/// Presentation policy, not a parsing rule: a paragraph containing this
/// phrase is split into a terminal disclaimer with a separating rule.
static DISCLAIMER_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)not financial advice").unwrap());

/// Render raw reply text into the final presentable tree.
///
/// Never fails and never panics, for any input; degraded constructs
/// (unterminated blocks, broken math) come out as visible, styled content
/// rather than errors or blank regions.
pub fn render(text: &str) -> Vec<Presentable> {
    let mut out = Vec::new();
    for block in segment(text) {
        match block {
            Block::Heading { level, text } => out.push(Presentable::Heading {
                level,
                content: tokenize(&text),
            }),
            Block::Paragraph { text } => compose_paragraph(&text, &mut out),
            Block::Blockquote { text } => out.push(Presentable::Blockquote {
                paragraphs: text.split('\n').map(tokenize).collect(),
            }),
            Block::BulletList { items } => out.push(Presentable::BulletList {
                items: items.iter().map(|item| tokenize(item)).collect(),
            }),
            Block::OrderedList { items } => out.push(Presentable::OrderedList {
                items: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| ListEntry {
                        number: index + 1,
                        content: tokenize(item),
                    })
                    .collect(),
            }),
            Block::CodeBlock { lang, code } => out.push(Presentable::CodeBlock { lang, code }),
            Block::DisplayMath { tex } => out.push(compose_display_math(tex)),
            Block::HorizontalRule => out.push(Presentable::HorizontalRule),
            Block::Blank => out.push(Presentable::Blank),
        }
    }
    out
}

/// Paragraphs get the disclaimer policy: text from the phrase match onward
/// becomes its own reduced-emphasis paragraph behind a separating rule.
/// Each piece is tokenized by the ordinary tokenizer — the policy changes
/// grouping, never token boundaries within a piece.
fn compose_paragraph(text: &str, out: &mut Vec<Presentable>) {
    match DISCLAIMER_PHRASE.find(text) {
        Some(m) => {
            let head = text[..m.start()].trim_end();
            if !head.is_empty() {
                out.push(Presentable::Paragraph {
                    content: tokenize(head),
                    disclaimer: false,
                });
            }
            out.push(Presentable::HorizontalRule);
            out.push(Presentable::Paragraph {
                content: tokenize(&text[m.start()..]),
                disclaimer: true,
            });
        }
        None => out.push(Presentable::Paragraph {
            content: tokenize(text),
            disclaimer: false,
        }),
    }
}

fn compose_display_math(tex: String) -> Presentable {
    match math::typeset(&tex, true) {
        Some(markup) => Presentable::DisplayMath { tex, markup },
        // Fail loud but inline: the exact source, nothing added around it.
        None => Presentable::Paragraph {
            content: vec![Inline::Code { value: tex }],
            disclaimer: false,
        },
    }
}
