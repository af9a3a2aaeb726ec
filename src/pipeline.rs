/// Compression pipeline orchestrator.
use crate::document::TextDocument;
use crate::error::CompressError;
use crate::stages::{default_stages, Stage};
use crate::urls::{restore_urls, UrlScanner};

/// Default character budget a post must fit within.
pub const MAX_POST_LENGTH: usize = 140;

/// Applies the rewrite stages to a document, in a fixed order, until its
/// effective length fits the budget.
///
/// URL extraction always runs first and restoration always runs last; the
/// stages in between are one-shot and irreversible, with no retry or
/// rollback. The loop halts as soon as the document fits, so text already
/// under budget comes back byte-for-byte unchanged.
pub struct Compressor {
    limit: usize,
    scanner: UrlScanner,
    stages: Vec<Box<dyn Stage>>,
}

impl Compressor {
    /// Pipeline with the default budget of [`MAX_POST_LENGTH`] characters.
    pub fn new() -> Result<Self, CompressError> {
        Self::with_limit(MAX_POST_LENGTH)
    }

    pub fn with_limit(limit: usize) -> Result<Self, CompressError> {
        Ok(Self {
            limit,
            scanner: UrlScanner::new()?,
            stages: default_stages()?,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Run the pipeline over `doc` and return the final text.
    pub fn compress<'a>(&self, doc: &'a mut TextDocument) -> &'a str {
        self.scanner.extract(doc);

        for stage in &self.stages {
            if doc.effective_len() <= self.limit as i64 {
                break;
            }
            stage.apply(doc);
        }

        // Not a stage: restoration must run even after an early exit.
        restore_urls(doc);

        doc.compressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_text_under_the_limit() {
        let compressor = Compressor::new().unwrap();
        let mut doc = TextDocument::new("Something wicked this way comes.");
        compressor.compress(&mut doc);
        assert_eq!(doc.compressed(), doc.original());
    }

    #[test]
    fn compresses_text_over_the_limit() {
        let text = format!(
            "Something wicked this way comes. Fling string while you sing. {}",
            "x".repeat(140)
        );
        let compressor = Compressor::new().unwrap();
        let mut doc = TextDocument::new(text);
        compressor.compress(&mut doc);
        assert_eq!(
            doc.compressed(),
            "Smthng wckd ths way cms. Flng str whl you sng. x"
        );
    }

    #[test]
    fn custom_limit_forces_more_stages() {
        let compressor = Compressor::with_limit(10).unwrap();
        let mut doc = TextDocument::new("Something wicked this way comes.");
        compressor.compress(&mut doc);
        assert_ne!(doc.compressed(), doc.original());
        assert!(doc.compressed().len() < doc.original().len());
    }

    #[test]
    fn restores_urls_even_on_early_exit() {
        let text = "see http://123 ok";
        let compressor = Compressor::new().unwrap();
        let mut doc = TextDocument::new(text);
        compressor.compress(&mut doc);
        assert_eq!(doc.compressed(), text);
        assert_eq!(doc.urls(), ["http://123"]);
    }
}
