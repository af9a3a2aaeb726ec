/// Working state for one compression run.
use crate::counter::effective_length;
use crate::error::CompressError;
use crate::pipeline::Compressor;
use serde::Serialize;

/// A post being compressed: the untouched original, the working buffer the
/// stages rewrite, and the URLs pulled out of it.
///
/// A document lives for exactly one run; nothing mutates it outside the
/// pipeline.
#[derive(Debug, Clone)]
pub struct TextDocument {
    pub(crate) original: String,
    pub(crate) compressed: String,
    pub(crate) urls: Vec<String>,
}

/// Serializable snapshot of a finished run, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionSummary {
    pub original: String,
    pub compressed: String,
    pub urls: Vec<String>,
    pub original_length: usize,
    pub effective_length: i64,
    pub compression_level: f64,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        Self {
            compressed: original.clone(),
            original,
            urls: Vec::new(),
        }
    }

    /// The input text, immutable for the document's lifetime.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The working (or final) text.
    pub fn compressed(&self) -> &str {
        &self.compressed
    }

    /// URLs extracted from the text, in order of first appearance.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Replace the working text. Stages go through this; the original is
    /// never touched.
    pub fn set_compressed(&mut self, text: String) {
        self.compressed = text;
    }

    /// Budget length of the working text, with URLs charged at their
    /// virtual weight.
    pub fn effective_len(&self) -> i64 {
        effective_length(&self.compressed, &self.urls)
    }

    /// Percentage reduction of effective length relative to the original,
    /// rounded to two decimal places. Zero for an empty original, where the
    /// ratio is undefined.
    pub fn compression_level(&self) -> f64 {
        let original_len = self.original.chars().count();
        if original_len == 0 {
            return 0.0;
        }
        let level = 100.0 - (self.effective_len() as f64 / original_len as f64) * 100.0;
        (level * 100.0).round() / 100.0
    }

    /// Run the default pipeline over this document and return the final text.
    pub fn compress(&mut self) -> Result<&str, CompressError> {
        let compressor = Compressor::new()?;
        compressor.compress(self);
        Ok(&self.compressed)
    }

    pub fn summary(&self) -> CompressionSummary {
        CompressionSummary {
            original: self.original.clone(),
            compressed: self.compressed.clone(),
            urls: self.urls.clone(),
            original_length: self.original.chars().count(),
            effective_length: self.effective_len(),
            compression_level: self.compression_level(),
        }
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new("")
    }
}
