//! Inline tokenization: the second parser stage.
//!
//! Consumes one logical line and produces an ordered sequence of inline
//! nodes. A single compiled alternation drives the scan; the regex engine's
//! leftmost-first semantics give both the left-to-right sweep and the branch
//! priority: inline math before bold (so `\(` is never misread as an escaped
//! paren inside `**`), bold before italic, then inline code, then links.
//! One pass over one pattern also guarantees text consumed as bold is never
//! re-matched as italic.
//!
//! Everything between matches — and the interiors of bold, italic, and link
//! labels — runs through the financial highlighter, so `*$100*` becomes an
//! italic node wrapping a styled currency leaf. Code interiors stay opaque.
//! There is no recursive inline grammar: bold and italic do not nest into
//! each other, which is preserved subset behavior rather than an oversight.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::Inline;
use super::finance;
use super::math;

static INLINE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\\\((?P<math>.+?)\\\)",
        r"|\*\*(?P<bold>.+?)\*\*",
        r"|\*(?P<italic>[^*]+?)\*",
        r"|`(?P<code>[^`]+?)`",
        r"|\[(?P<label>[^\]]+)\]\((?P<url>[^)]+)\)",
    ))
    .unwrap()
});

/// Tokenize one line into inline nodes.
///
/// Sibling nodes are ordered, non-overlapping, and cover the whole line.
/// Inline math that fails to typeset degrades to a `Code` node holding the
/// raw TeX source.
pub fn tokenize(line: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for caps in INLINE_TOKEN.captures_iter(line) {
        let matched = caps.get(0).expect("capture group 0 always exists");
        if matched.start() > cursor {
            nodes.extend(finance::highlight(&line[cursor..matched.start()]));
        }

        if let Some(tex) = caps.name("math") {
            nodes.push(match math::typeset(tex.as_str(), false) {
                Some(markup) => Inline::Math {
                    tex: tex.as_str().to_string(),
                    markup,
                },
                None => Inline::Code {
                    value: tex.as_str().to_string(),
                },
            });
        } else if let Some(inner) = caps.name("bold") {
            nodes.push(Inline::Bold {
                children: finance::highlight(inner.as_str()),
            });
        } else if let Some(inner) = caps.name("italic") {
            nodes.push(Inline::Italic {
                children: finance::highlight(inner.as_str()),
            });
        } else if let Some(code) = caps.name("code") {
            nodes.push(Inline::Code {
                value: code.as_str().to_string(),
            });
        } else if let (Some(label), Some(url)) = (caps.name("label"), caps.name("url")) {
            nodes.push(Inline::Link {
                label: finance::highlight(label.as_str()),
                url: url.as_str().to_string(),
            });
        }

        cursor = matched.end();
    }

    if cursor < line.len() {
        nodes.extend(finance::highlight(&line[cursor..]));
    }

    nodes
}
