//! Node types produced by the rendering pipeline.
//!
//! All trees are tagged unions so consumers can match exhaustively and the
//! compiler catches a missing case whenever a node kind is added. Every type
//! serializes with a `kind` tag, which keeps the output boundary diffable
//! for a presentation layer that paints the tree without re-parsing.
//!
//! Nodes are created fresh on every pass over the input and never mutated
//! afterwards; a new pass discards and rebuilds the whole tree.

use serde::Serialize;

/// Structural unit of the document, one per Markdown-like construct.
///
/// The segmenter emits these in source order. Content fields hold raw text;
/// inline parsing happens later, during composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// 1 through 3; deeper levels are not part of the subset.
        level: u8,
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    OrderedList {
        /// Source numbering is discarded; items renumber from 1 at render time.
        items: Vec<String>,
    },
    Blockquote {
        /// May contain newlines; each line renders as its own paragraph
        /// inside the quote.
        text: String,
    },
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    DisplayMath {
        tex: String,
    },
    HorizontalRule,
    Blank,
    Paragraph {
        text: String,
    },
}

/// Sign of a percentage token. Serialized as `+` / `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

/// Styled unit of text within a block's content.
///
/// Siblings are ordered and non-overlapping, and together they cover every
/// character of the source line. `Code` and `Link` interiors are opaque:
/// no markup is parsed inside them (link labels are still scanned for
/// financial tokens).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text {
        value: String,
    },
    /// Single level only; bold never nests inside bold.
    Bold {
        children: Vec<Inline>,
    },
    Italic {
        children: Vec<Inline>,
    },
    Code {
        value: String,
    },
    Link {
        label: Vec<Inline>,
        url: String,
    },
    /// Inline math that typeset successfully. A failed typeset degrades to
    /// a `Code` node carrying the raw TeX, so broken formulas stay visible.
    Math {
        tex: String,
        markup: String,
    },
    /// Currency amount; `value` keeps the leading `$`.
    Currency {
        value: String,
    },
    /// Signed percentage; `value` keeps the sign and trailing `%`.
    Percent {
        value: String,
        sign: Sign,
    },
}

impl Inline {
    /// Returns the literal text this node carries when it is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text { value }
            | Inline::Code { value }
            | Inline::Currency { value }
            | Inline::Percent { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns nested content for container nodes (bold/italic/link label).
    pub fn children(&self) -> Option<&[Inline]> {
        match self {
            Inline::Bold { children } | Inline::Italic { children } => Some(children),
            Inline::Link { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Inline::Text { .. })
    }
}

/// One entry of an ordered list, numbered at render time starting from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub number: usize,
    pub content: Vec<Inline>,
}

/// Final presentable node, ready for a UI layer to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Presentable {
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    Paragraph {
        content: Vec<Inline>,
        /// Marks a terminal disclaimer paragraph, rendered with reduced
        /// emphasis by the presentation layer.
        disclaimer: bool,
    },
    Blockquote {
        paragraphs: Vec<Vec<Inline>>,
    },
    BulletList {
        items: Vec<Vec<Inline>>,
    },
    OrderedList {
        items: Vec<ListEntry>,
    },
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    DisplayMath {
        tex: String,
        markup: String,
    },
    HorizontalRule,
    Blank,
}
