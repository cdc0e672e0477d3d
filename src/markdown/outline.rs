//! Outline formatter for presentable trees.
//!
//! One line per node, nesting encoded as two spaces of indentation, a short
//! glyph per node kind, and labels truncated so the outline stays scannable.
//! Meant for CLI inspection and snapshot tests, not for end users.
//!
//! Glyphs:
//!     Heading: §   Paragraph: ¶   Blockquote: ❝   List: ☰   Item: •
//!     Code block: 𝒱   Display math: √   Rule: ―   Blank: ␣
//!     Text: ◦   Bold: 𝐁   Italic: 𝐼   Code: ƒ   Math: √   Link: ⊕
//!     Currency: ¤   Percent: %

use super::ast::{Inline, Presentable};

const MAX_LABEL: usize = 40;

/// Render a presentable tree as an indented one-line-per-node outline.
pub fn outline(nodes: &[Presentable]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        write_presentable(node, 0, &mut lines);
    }
    lines.join("\n")
}

fn write_presentable(node: &Presentable, depth: usize, lines: &mut Vec<String>) {
    match node {
        Presentable::Heading { level, content } => {
            push_line(lines, depth, &format!("§ h{level}"));
            write_inlines(content, depth + 1, lines);
        }
        Presentable::Paragraph {
            content,
            disclaimer,
        } => {
            let label = if *disclaimer { "¶ (disclaimer)" } else { "¶" };
            push_line(lines, depth, label);
            write_inlines(content, depth + 1, lines);
        }
        Presentable::Blockquote { paragraphs } => {
            push_line(lines, depth, "❝");
            for paragraph in paragraphs {
                push_line(lines, depth + 1, "¶");
                write_inlines(paragraph, depth + 2, lines);
            }
        }
        Presentable::BulletList { items } => {
            push_line(lines, depth, &format!("☰ {} items", items.len()));
            for item in items {
                push_line(lines, depth + 1, "•");
                write_inlines(item, depth + 2, lines);
            }
        }
        Presentable::OrderedList { items } => {
            push_line(lines, depth, &format!("☰ ordered, {} items", items.len()));
            for entry in items {
                push_line(lines, depth + 1, &format!("• {}.", entry.number));
                write_inlines(&entry.content, depth + 2, lines);
            }
        }
        Presentable::CodeBlock { lang, code } => {
            let tag = lang.as_deref().unwrap_or("text");
            let flat = code.replace('\n', "⏎");
            push_line(lines, depth, &format!("𝒱 [{tag}] {}", truncate(&flat)));
        }
        Presentable::DisplayMath { tex, .. } => {
            push_line(lines, depth, &format!("√ {}", truncate(tex)));
        }
        Presentable::HorizontalRule => push_line(lines, depth, "―"),
        Presentable::Blank => push_line(lines, depth, "␣"),
    }
}

fn write_inlines(nodes: &[Inline], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            Inline::Text { value } => {
                push_line(lines, depth, &format!("◦ \"{}\"", truncate(value)));
            }
            Inline::Bold { children } => {
                push_line(lines, depth, "𝐁");
                write_inlines(children, depth + 1, lines);
            }
            Inline::Italic { children } => {
                push_line(lines, depth, "𝐼");
                write_inlines(children, depth + 1, lines);
            }
            Inline::Code { value } => {
                push_line(lines, depth, &format!("ƒ {}", truncate(value)));
            }
            Inline::Link { label, url } => {
                push_line(lines, depth, &format!("⊕ {}", truncate(url)));
                write_inlines(label, depth + 1, lines);
            }
            Inline::Math { tex, .. } => {
                push_line(lines, depth, &format!("√ {}", truncate(tex)));
            }
            Inline::Currency { value } => {
                push_line(lines, depth, &format!("¤ {}", truncate(value)));
            }
            Inline::Percent { value, .. } => {
                push_line(lines, depth, &format!("% {}", truncate(value)));
            }
        }
    }
}

fn push_line(lines: &mut Vec<String>, depth: usize, label: &str) {
    lines.push(format!("{}{}", "  ".repeat(depth), label));
}

fn truncate(s: &str) -> String {
    if s.chars().count() > MAX_LABEL {
        let mut truncated: String = s.chars().take(MAX_LABEL).collect();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}
