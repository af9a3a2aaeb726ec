/// Text transformation stages.
///
/// Each stage is one pure rewrite rule. The orchestrator owns an ordered list
/// of boxed stages and applies them while the text is over budget; every rule
/// can also be unit-tested on its own.
pub mod abbreviations;
pub mod elision;
pub mod grammar;
pub mod punctuation;
pub mod texting;
pub mod whitespace;

pub use abbreviations::Abbreviate;
pub use elision::{DedupeConsonants, ElideVowels, TrimIng};
pub use grammar::{CorrectGrammar, FormContractions, StripApostrophes};
pub use punctuation::DedupePunctuation;
pub use texting::TextingShorthand;
pub use whitespace::{CompactSentences, NormalizeWhitespace};

use crate::document::TextDocument;
use crate::error::CompressError;

/// One rewrite rule in the pipeline.
pub trait Stage {
    fn name(&self) -> &'static str;

    /// Pure text-to-text rewrite.
    fn rewrite(&self, text: &str) -> String;

    /// Apply the rewrite to the document's working buffer.
    fn apply(&self, doc: &mut TextDocument) {
        let rewritten = self.rewrite(doc.compressed());
        doc.set_compressed(rewritten);
    }
}

/// The fixed stage order of the default pipeline.
pub fn default_stages() -> Result<Vec<Box<dyn Stage>>, CompressError> {
    Ok(vec![
        Box::new(NormalizeWhitespace),
        Box::new(CorrectGrammar::new()?),
        Box::new(FormContractions::new()?),
        Box::new(DedupePunctuation),
        Box::new(Abbreviate::new()?),
        Box::new(ElideVowels),
        Box::new(DedupeConsonants),
        Box::new(StripApostrophes::new()?),
        Box::new(CompactSentences::new()?),
    ])
}

/// Rewrite a text word by word. Splitting and rejoining collapses whitespace
/// runs as a side effect, matching the original rule behavior.
pub(crate) fn rewrite_words<F>(text: &str, rule: F) -> String
where
    F: Fn(&str) -> String,
{
    text.split_whitespace()
        .map(rule)
        .collect::<Vec<_>>()
        .join(" ")
}
