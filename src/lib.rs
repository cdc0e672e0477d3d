//! # marketdown
//!
//! A safe renderer for assistant replies written in a constrained authoring
//! language: a Markdown subset (headings, emphasis, inline code, fenced code
//! blocks, lists, blockquotes, horizontal rules, links), LaTeX-style math
//! (`\(...\)`, `\[...\]`, `$$...$$`), and financial token highlighting
//! (`$1,234.56`, `+2.3%`, `-1.1%`).
//!
//! The pipeline has two parsing stages and one composition stage:
//!
//!   raw text -> [segment](markdown::blocks::segment) -> block list
//!            -> [tokenize](markdown::inlines::tokenize) per paragraph line
//!            -> [render](markdown::compose::render) -> presentable tree
//!
//! Every stage is synchronous and pure, never panics on any input, and is
//! cheap enough that streaming callers simply re-run the whole pipeline on
//! each new prefix of the accumulating message (see
//! [StreamAccumulator](markdown::stream::StreamAccumulator)). Arbitrary
//! markup never passes through: the output tree contains only the node kinds
//! defined in [markdown::ast], so a presentation layer cannot be injected
//! into.

pub mod markdown;

pub use markdown::ast::{Block, Inline, ListEntry, Presentable, Sign};
pub use markdown::compose::render;
pub use markdown::stream::StreamAccumulator;
