//! Snapshot tests over the outline view of rendered replies.
//!
//! The outline is a stable one-line-per-node text form of the presentable
//! tree, so a snapshot catches regressions anywhere in the pipeline:
//! segmentation, inline tokenization, math typesetting, finance
//! highlighting, and the disclaimer policy.

use marketdown::markdown::outline::outline;
use marketdown::render;

#[test]
fn earnings_reply() {
    let source = "## Q2 Results\n\n\
        Revenue grew +14.2% to $2,450,000.\n\n\
        - **EPS**: $1.82\n\
        - *Guidance*: raised\n\n\
        Not financial advice.";
    let text = outline(&render(source));
    insta::assert_snapshot!("earnings_reply", text);
}

#[test]
fn math_and_code() {
    let source = "The ratio is \\(\\frac{p}{e}\\) for now.\n\n\
        $$\nr = \\sqrt{x} \\cdot 2\n$$\n\n\
        ```text\nkeep $5 and +1% as-is\n```";
    let text = outline(&render(source));
    insta::assert_snapshot!("math_and_code", text);
}

#[test]
fn quoted_outlook() {
    let source = "# Outlook\n\n\
        > Margins held at 41%.\n\
        > We see *upside* ahead.\n\n\
        1. Trim -0.5% exposure\n\
        2. Hold [cash](https://example.com/notes)";
    let text = outline(&render(source));
    insta::assert_snapshot!("quoted_outlook", text);
}
