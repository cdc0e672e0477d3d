//! Math typesetting adapter.
//!
//! Converts one LaTeX fragment into presentational text, or signals failure.
//! Conversion rides on the `unicodeit` crate with local fallbacks for
//! fractions, roots, and a handful of operators it does not cover. The
//! adapter is deliberately strict about failure: malformed input, any
//! trust-escalating command, or a control sequence that survives conversion
//! all return `None`. Callers render `None` as an inline code span holding
//! the raw TeX, so a broken formula is never silently dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_SEQUENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[a-zA-Z]+").unwrap());

/// Commands that read or execute outside the formula. None of these have a
/// presentational meaning here, so their presence fails the whole fragment.
const FORBIDDEN_COMMANDS: &[&str] = &[
    "\\input",
    "\\include",
    "\\write",
    "\\read",
    "\\openin",
    "\\openout",
    "\\def",
    "\\edef",
    "\\gdef",
    "\\csname",
    "\\catcode",
    "\\expandafter",
    "\\newcommand",
    "\\renewcommand",
    "\\url",
    "\\href",
];

/// Convert `tex` to presentational text.
///
/// Returns `None` on any failure: empty input, unbalanced braces, forbidden
/// commands, or constructs the converter cannot express. In inline mode the
/// result collapses whitespace runs to single spaces; display mode keeps
/// line structure so multi-line bodies stay readable.
pub fn typeset(tex: &str, display_mode: bool) -> Option<String> {
    let tex = tex.trim();
    if tex.is_empty() {
        return None;
    }
    if FORBIDDEN_COMMANDS.iter().any(|cmd| tex.contains(cmd)) {
        return None;
    }
    if !braces_balanced(tex) {
        return None;
    }

    let mut converted = unicodeit::replace(tex);
    converted = rewrite_fractions(&converted);
    converted = rewrite_roots(&converted);
    converted = replace_operators(&converted);

    // Anything still command-shaped means the conversion was incomplete.
    if CONTROL_SEQUENCE.is_match(&converted) {
        return None;
    }

    if display_mode {
        Some(
            converted
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    } else {
        Some(converted.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

fn braces_balanced(tex: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in tex.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Rewrite `\frac{a}{b}` as `a/b`, innermost-last (each pass removes the
/// leftmost occurrence, so nested numerators resolve on later passes).
fn rewrite_fractions(text: &str) -> String {
    let mut result = text.to_string();
    while let Some(start) = result.find("\\frac{") {
        let Some(num_len) = find_matching_brace(&result[start + 6..]) else {
            break;
        };
        let num_end = start + 6 + num_len;
        let numerator = result[start + 6..num_end].to_string();
        let rest = &result[num_end + 1..];
        let Some(stripped) = rest.strip_prefix('{') else {
            break;
        };
        let Some(den_len) = find_matching_brace(stripped) else {
            break;
        };
        let denominator = stripped[..den_len].to_string();
        let full_end = num_end + den_len + 3;
        result = format!(
            "{}{}/{}{}",
            &result[..start],
            numerator,
            denominator,
            &result[full_end..]
        );
    }
    result
}

/// Rewrite `\sqrt{x}` as `√x` (and a bare `\sqrt` as `√`).
fn rewrite_roots(text: &str) -> String {
    let mut result = text.to_string();
    while let Some(start) = result.find("\\sqrt{") {
        let Some(len) = find_matching_brace(&result[start + 6..]) else {
            break;
        };
        let content = result[start + 6..start + 6 + len].to_string();
        result = format!(
            "{}√{}{}",
            &result[..start],
            content,
            &result[start + 7 + len..]
        );
    }
    result.replace("\\sqrt", "√")
}

fn replace_operators(text: &str) -> String {
    const OPERATORS: &[(&str, &str)] = &[
        ("\\cdot", "·"),
        ("\\times", "×"),
        ("\\div", "÷"),
        ("\\pm", "±"),
        ("\\neq", "≠"),
        ("\\approx", "≈"),
        ("\\equiv", "≡"),
        ("\\leq", "≤"),
        ("\\geq", "≥"),
    ];
    let mut result = text.to_string();
    for (command, symbol) in OPERATORS {
        result = result.replace(command, symbol);
    }
    result
}

/// Offset of the brace closing the group this slice starts inside.
fn find_matching_brace(s: &str) -> Option<usize> {
    let mut depth = 1;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_expression_passes_through() {
        assert_eq!(typeset("x + y", false), Some("x + y".into()));
    }

    #[test]
    fn greek_letters_convert() {
        assert_eq!(typeset("\\alpha", false), Some("α".into()));
    }

    #[test]
    fn malformed_tex_returns_none() {
        assert_eq!(typeset("\\frac{", false), None);
        assert_eq!(typeset("a } b", false), None);
    }

    #[test]
    fn empty_and_whitespace_return_none() {
        assert_eq!(typeset("", false), None);
        assert_eq!(typeset("   ", true), None);
    }

    #[test]
    fn forbidden_commands_return_none() {
        assert_eq!(typeset("\\input{evil}", false), None);
        assert_eq!(typeset("x + \\write18{rm -rf}", true), None);
        assert_eq!(typeset("\\href{x}{y}", false), None);
    }

    #[test]
    fn fractions_flatten() {
        assert_eq!(typeset("\\frac{a}{b}", false), Some("a/b".into()));
    }

    #[test]
    fn roots_flatten() {
        assert_eq!(typeset("\\sqrt{2}", false), Some("√2".into()));
    }

    #[test]
    fn operator_fallbacks_apply() {
        assert_eq!(typeset("a \\times b", false), Some("a × b".into()));
        assert_eq!(typeset("p \\leq q", false), Some("p ≤ q".into()));
    }

    #[test]
    fn unknown_command_fails_loudly() {
        assert_eq!(typeset("\\notarealcommand x", false), None);
    }

    #[test]
    fn display_mode_keeps_line_breaks() {
        assert_eq!(
            typeset("a + b\n  c + d", true),
            Some("a + b\nc + d".into())
        );
    }

    #[test]
    fn inline_mode_collapses_whitespace() {
        assert_eq!(typeset("a  +   b", false), Some("a + b".into()));
    }
}
