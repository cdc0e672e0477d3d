//! Streaming boundary: accumulate prefixes, re-render wholesale.
//!
//! A reply arrives either complete or as a growing stream of text
//! fragments. The accumulator keeps the monotonically growing text plus a
//! terminal flag, and every update triggers exactly one full pipeline pass
//! over the current string. Full re-parse per chunk is the chosen strategy
//! for chat-message sizes; no node identity survives between passes, so
//! consumers needing stable animation must key off text length or content,
//! not node identity.

use super::ast::Presentable;
use super::compose;

/// Growing reply text with its terminal flag.
#[derive(Debug, Default, Clone)]
pub struct StreamAccumulator {
    text: String,
    terminal: bool,
}

impl StreamAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and re-render the whole accumulated text.
    ///
    /// The previous render result is simply superseded; each pass completes
    /// synchronously, so there is nothing in flight to cancel.
    pub fn push(&mut self, chunk: &str) -> Vec<Presentable> {
        self.text.push_str(chunk);
        compose::render(&self.text)
    }

    /// Mark the message complete and render the final tree.
    pub fn finish(&mut self) -> Vec<Presentable> {
        self.terminal = true;
        compose::render(&self.text)
    }

    /// Render the current text without changing any state.
    pub fn render(&self) -> Vec<Presentable> {
        compose::render(&self.text)
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ast::{Inline, Presentable};

    #[test]
    fn fragments_accumulate() {
        let mut stream = StreamAccumulator::new();
        stream.push("Price ");
        stream.push("is $1");
        assert_eq!(stream.text(), "Price is $1");
        assert!(!stream.is_terminal());
    }

    #[test]
    fn partial_tokens_render_eagerly() {
        let mut stream = StreamAccumulator::new();
        let tree = stream.push("Price is $1,234");
        assert_eq!(
            tree,
            vec![Presentable::Paragraph {
                content: vec![
                    Inline::Text {
                        value: "Price is ".into()
                    },
                    Inline::Currency {
                        value: "$1,234".into()
                    },
                ],
                disclaimer: false,
            }]
        );
    }

    #[test]
    fn finish_marks_terminal() {
        let mut stream = StreamAccumulator::new();
        stream.push("done");
        let final_tree = stream.finish();
        assert!(stream.is_terminal());
        assert_eq!(final_tree, stream.render());
    }
}
