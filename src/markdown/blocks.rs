//! Block segmentation: the first parser stage.
//!
//! The segmenter walks the input line by line with a cursor and partitions
//! it into an ordered list of [`Block`]s. Detection rules are tried
//! top-to-bottom against each line's left-trimmed content; the first match
//! wins. Lookahead never exceeds the search for a block's closing delimiter,
//! and unterminated constructs (an open fence or math block with no closer)
//! consume to end of input rather than erroring. The segmenter never fails:
//! anything unrecognized falls back to a single-line paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::Block;

static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*_]{3,}\s*$").unwrap());
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Partition `text` into an ordered list of blocks.
///
/// The empty string yields the empty list. Consecutive blank lines each
/// produce their own [`Block::Blank`]; consecutive non-blank text lines do
/// NOT merge into one paragraph (a deliberate simplification of Markdown:
/// callers wanting reflow must separate paragraphs with blank lines).
pub fn segment(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();

        // 1. Display math, bracket form.
        if let Some(rest) = trimmed.strip_prefix("\\[") {
            let (tex, next) = consume_math(rest, &lines, i + 1, "\\]");
            blocks.push(Block::DisplayMath { tex });
            i = next;
            continue;
        }

        // 2. Display math, dollar form. `$$$` is not an opener.
        if trimmed.starts_with("$$") && !trimmed.starts_with("$$$") {
            let (tex, next) = consume_math(&trimmed[2..], &lines, i + 1, "$$");
            blocks.push(Block::DisplayMath { tex });
            i = next;
            continue;
        }

        // 3. Fenced code; body is verbatim until a closing fence or EOF.
        if let Some(rest) = trimmed.strip_prefix("```") {
            let tag = rest.trim();
            let lang = (!tag.is_empty()).then(|| tag.to_string());
            let mut body: Vec<&str> = Vec::new();
            let mut j = i + 1;
            while j < lines.len() {
                let candidate = lines[j];
                j += 1;
                if candidate.trim_start().starts_with("```") {
                    break;
                }
                body.push(candidate);
            }
            blocks.push(Block::CodeBlock {
                lang,
                code: body.join("\n"),
            });
            i = j;
            continue;
        }

        // 4. Horizontal rule.
        if HORIZONTAL_RULE.is_match(trimmed) {
            blocks.push(Block::HorizontalRule);
            i += 1;
            continue;
        }

        // 5. Headings, longest prefix first.
        if let Some((level, rest)) = heading_prefix(trimmed) {
            blocks.push(Block::Heading {
                level,
                text: rest.to_string(),
            });
            i += 1;
            continue;
        }

        // 6. Blockquote: adjacent `> ` lines group into one quote.
        if trimmed.starts_with("> ") {
            let mut quoted: Vec<&str> = Vec::new();
            let mut j = i;
            while j < lines.len() {
                match lines[j].trim_start().strip_prefix("> ") {
                    Some(inner) => {
                        quoted.push(inner);
                        j += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::Blockquote {
                text: quoted.join("\n"),
            });
            i = j;
            continue;
        }

        // 7. Bullet list: adjacent marker lines group, one item per line.
        if BULLET_ITEM.is_match(trimmed) {
            let (items, next) = collect_items(&lines, i, &BULLET_ITEM);
            blocks.push(Block::BulletList { items });
            i = next;
            continue;
        }

        // 8. Ordered list; source numbering is dropped here.
        if ORDERED_ITEM.is_match(trimmed) {
            let (items, next) = collect_items(&lines, i, &ORDERED_ITEM);
            blocks.push(Block::OrderedList { items });
            i = next;
            continue;
        }

        // 9. Blank line.
        if trimmed.is_empty() {
            blocks.push(Block::Blank);
            i += 1;
            continue;
        }

        // 10. Fallback: single-line paragraph, raw line preserved.
        blocks.push(Block::Paragraph {
            text: line.to_string(),
        });
        i += 1;
    }

    blocks
}

/// Consume a display-math body opened on the current line.
///
/// `opener_rest` is the opening line's content after the delimiter. A closer
/// on the same line yields a single-line block; otherwise subsequent lines
/// are consumed until a line containing the closer, or EOF.
fn consume_math(opener_rest: &str, lines: &[&str], mut i: usize, closer: &str) -> (String, usize) {
    if let Some(end) = opener_rest.find(closer) {
        return (opener_rest[..end].trim().to_string(), i);
    }

    let mut body: Vec<String> = Vec::new();
    let head = opener_rest.trim();
    if !head.is_empty() {
        body.push(head.to_string());
    }

    while i < lines.len() {
        let line = lines[i];
        i += 1;
        if let Some(end) = line.find(closer) {
            let tail = line[..end].trim();
            if !tail.is_empty() {
                body.push(tail.to_string());
            }
            return (body.join("\n"), i);
        }
        body.push(line.to_string());
    }

    (body.join("\n"), i)
}

fn heading_prefix(trimmed: &str) -> Option<(u8, &str)> {
    if let Some(rest) = trimmed.strip_prefix("### ") {
        Some((3, rest))
    } else if let Some(rest) = trimmed.strip_prefix("## ") {
        Some((2, rest))
    } else if let Some(rest) = trimmed.strip_prefix("# ") {
        Some((1, rest))
    } else {
        None
    }
}

/// Collect adjacent list lines matching `marker`, returning item contents
/// (text after the marker match) and the index of the first non-matching line.
fn collect_items(lines: &[&str], mut i: usize, marker: &Regex) -> (Vec<String>, usize) {
    let mut items = Vec::new();
    while i < lines.len() {
        let trimmed = lines[i].trim_start();
        match marker.find(trimmed) {
            Some(m) => {
                items.push(trimmed[m.end()..].to_string());
                i += 1;
            }
            None => break,
        }
    }
    (items, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(segment(""), Vec::new());
    }

    #[test]
    fn single_line_paragraphs_do_not_merge() {
        let blocks = segment("first line\nsecond line");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    text: "first line".into()
                },
                Block::Paragraph {
                    text: "second line".into()
                },
            ]
        );
    }

    #[test]
    fn bracket_math_spans_lines() {
        let blocks = segment("\\[\nx = \\frac{a}{b}\n\\]");
        assert_eq!(
            blocks,
            vec![Block::DisplayMath {
                tex: "x = \\frac{a}{b}".into()
            }]
        );
    }

    #[test]
    fn dollar_math_single_line() {
        let blocks = segment("$$x = 1$$");
        assert_eq!(blocks, vec![Block::DisplayMath { tex: "x = 1".into() }]);
    }

    #[test]
    fn triple_dollar_is_not_an_opener() {
        let blocks = segment("$$$");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "$$$".into()
            }]
        );
    }

    #[test]
    fn unterminated_math_consumes_to_eof() {
        let blocks = segment("$$\na + b\nc + d");
        assert_eq!(
            blocks,
            vec![Block::DisplayMath {
                tex: "a + b\nc + d".into()
            }]
        );
    }

    #[test]
    fn fenced_code_keeps_language_tag() {
        let blocks = segment("```python\nprint(1)\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: Some("python".into()),
                code: "print(1)".into()
            }]
        );
    }

    #[test]
    fn code_fence_body_is_verbatim() {
        let blocks = segment("```\n# not a heading\n- not a list\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: None,
                code: "# not a heading\n- not a list".into()
            }]
        );
    }

    #[test]
    fn horizontal_rule_beats_bullet_marker() {
        let blocks = segment("---");
        assert_eq!(blocks, vec![Block::HorizontalRule]);
    }

    #[test]
    fn blockquote_groups_and_strips_prefix() {
        let blocks = segment("> first\n> second\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Blockquote {
                    text: "first\nsecond".into()
                },
                Block::Paragraph {
                    text: "after".into()
                },
            ]
        );
    }

    #[test]
    fn lists_group_adjacent_lines() {
        let blocks = segment("- a\n- b\n\n1. x\n2. y");
        assert_eq!(
            blocks,
            vec![
                Block::BulletList {
                    items: vec!["a".into(), "b".into()]
                },
                Block::Blank,
                Block::OrderedList {
                    items: vec!["x".into(), "y".into()]
                },
            ]
        );
    }

    #[test]
    fn ordered_list_drops_source_numbers() {
        let blocks = segment("7. seventh\n9. ninth");
        assert_eq!(
            blocks,
            vec![Block::OrderedList {
                items: vec!["seventh".into(), "ninth".into()]
            }]
        );
    }

    #[test]
    fn consecutive_blanks_are_not_collapsed() {
        let blocks = segment("a\n\n\nb");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph { text: "a".into() },
                Block::Blank,
                Block::Blank,
                Block::Paragraph { text: "b".into() },
            ]
        );
    }

    #[test]
    fn heading_without_space_is_a_paragraph() {
        let blocks = segment("#tag");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "#tag".into()
            }]
        );
    }

    #[test]
    fn deepest_heading_prefix_wins() {
        let blocks = segment("### deep\n## mid\n# top");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 3,
                    text: "deep".into()
                },
                Block::Heading {
                    level: 2,
                    text: "mid".into()
                },
                Block::Heading {
                    level: 1,
                    text: "top".into()
                },
            ]
        );
    }

    #[test]
    fn unterminated_fence_consumes_to_eof() {
        let blocks = segment("```rust\nfn main() {}");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: Some("rust".into()),
                code: "fn main() {}".into()
            }]
        );
    }
}
