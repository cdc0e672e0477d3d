//! Financial token highlighting.
//!
//! Splits a plain-text span into styled and unstyled runs. Two token classes
//! exist: currency amounts (`$1,234.56`) and signed percentages (`+2.3%`,
//! `-1.1%`). The classes cannot collide — currency requires a literal `$`,
//! percent a leading sign and trailing `%` — so a single left-to-right merge
//! of both pattern scans yields ordered, non-overlapping nodes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{Inline, Sign};

static CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[\d,]+(\.\d+)?").unwrap());
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]\d+(\.\d+)?%").unwrap());

/// Scan `text` and split it into `Text`, `Currency`, and `Percent` nodes.
///
/// Unmatched runs between and around tokens become `Text` nodes; the empty
/// string yields no nodes. The sign character of a percentage is preserved
/// on the node because gain and loss style differently.
pub fn highlight(text: &str) -> Vec<Inline> {
    let mut tokens: Vec<(usize, usize, Inline)> = Vec::new();

    for m in CURRENCY.find_iter(text) {
        tokens.push((
            m.start(),
            m.end(),
            Inline::Currency {
                value: m.as_str().to_string(),
            },
        ));
    }
    for m in PERCENT.find_iter(text) {
        let sign = if m.as_str().starts_with('+') {
            Sign::Plus
        } else {
            Sign::Minus
        };
        tokens.push((
            m.start(),
            m.end(),
            Inline::Percent {
                value: m.as_str().to_string(),
                sign,
            },
        ));
    }
    tokens.sort_by_key(|&(start, ..)| start);

    let mut nodes = Vec::new();
    let mut cursor = 0;
    for (start, end, node) in tokens {
        debug_assert!(start >= cursor, "financial token classes must not overlap");
        if start > cursor {
            nodes.push(Inline::Text {
                value: text[cursor..start].to_string(),
            });
        }
        nodes.push(node);
        cursor = end;
    }
    if cursor < text.len() {
        nodes.push(Inline::Text {
            value: text[cursor..].to_string(),
        });
    }

    nodes
}
