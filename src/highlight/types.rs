use serde::{Deserialize, Serialize};

/// One markup token of a highlighted source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SpanToken {
    /// A colour span opens; the payload is the highlighter's colour id.
    Open(String),
    /// The most recently opened colour span closes.
    Close,
    /// Visible source text.
    Text(String),
}

/// One physical source line as emitted by the highlighter, before repair.
///
/// The highlighter closes a span only when the colour changes, so a span
/// opened here may stay open across any number of following lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightedLine {
    pub tokens: Vec<SpanToken>,
}

impl HighlightedLine {
    /// A line of plain, uncoloured text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            tokens: vec![SpanToken::Text(text.into())],
        }
    }

    pub fn visible_text(&self) -> String {
        visible_text(&self.tokens)
    }
}

/// A line whose markup is self-contained: every span opened on it is also
/// closed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairedLine {
    /// 1-based physical line number in the original file.
    pub number: usize,
    pub tokens: Vec<SpanToken>,
    pub is_error_line: bool,
}

impl RepairedLine {
    pub fn visible_text(&self) -> String {
        visible_text(&self.tokens)
    }

    pub fn opens(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, SpanToken::Open(_)))
            .count()
    }

    pub fn closes(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, SpanToken::Close))
            .count()
    }

    /// View the repaired line as highlighter output again, e.g. to feed an
    /// extract back through extraction.
    pub fn to_highlighted(&self) -> HighlightedLine {
        HighlightedLine {
            tokens: self.tokens.clone(),
        }
    }
}

fn visible_text(tokens: &[SpanToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        if let SpanToken::Text(text) = token {
            out.push_str(text);
        }
    }
    out
}
