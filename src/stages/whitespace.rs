/// Whitespace-oriented stages.
use crate::error::CompressError;
use crate::stages::Stage;
use regex::Regex;

/// Collapse every whitespace run to a single space and trim the ends.
pub struct NormalizeWhitespace;

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn rewrite(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Remove whitespace immediately following a punctuation character, joining
/// the punctuation directly to the next token.
pub struct CompactSentences {
    pattern: Regex,
}

impl CompactSentences {
    pub fn new() -> Result<Self, CompressError> {
        Ok(Self {
            pattern: Regex::new(r"([[:punct:]])\s*(\S)")?,
        })
    }
}

impl Stage for CompactSentences {
    fn name(&self) -> &'static str {
        "sentences"
    }

    fn rewrite(&self, text: &str) -> String {
        self.pattern.replace_all(text, "${1}${2}").into_owned()
    }
}
